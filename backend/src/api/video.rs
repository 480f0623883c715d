use crate::models::VideoForm;
use crate::services::video_service::{self, rejection_messages, SubmissionOutcome};
use crate::views::{render_add_form, FieldState, VideoFormState};
use crate::AppState;
use log::{error, warn};
use rocket::form::{Context, Contextual, Form};
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::{get, post, Responder, State};

#[derive(Responder)]
pub enum AddVideoResponse {
    Accepted(Redirect),
    Rejected(RawHtml<String>),
    Failed(Status),
}

fn field_state(context: &Context<'_>, submitted: Option<&str>, field: &str) -> FieldState {
    let value = submitted
        .or_else(|| context.field_value(field))
        .unwrap_or_default();
    FieldState {
        value: value.to_string(),
        errors: context
            .field_errors(field)
            .map(|e| e.to_string())
            .collect(),
    }
}

fn form_state(context: &Context<'_>, submitted: Option<&VideoForm>) -> VideoFormState {
    VideoFormState {
        name: field_state(context, submitted.map(|f| f.name.as_str()), "name"),
        url: field_state(context, submitted.map(|f| f.url.as_str()), "url"),
        notes: field_state(
            context,
            submitted.and_then(|f| f.notes.as_deref()),
            "notes",
        ),
    }
}

#[get("/add")]
pub fn add_video_form() -> RawHtml<String> {
    RawHtml(render_add_form(&VideoFormState::default(), &[]))
}

#[post("/add", data = "<form>")]
pub fn add_video<'r>(
    state: &State<AppState>,
    form: Form<Contextual<'r, VideoForm>>,
) -> AddVideoResponse {
    let form = form.into_inner();
    let Some(video_form) = form.value.as_ref() else {
        warn!("Rejected video submission with invalid fields");
        let page = render_add_form(&form_state(&form.context, None), &rejection_messages(None));
        return AddVideoResponse::Rejected(RawHtml(page));
    };

    match video_service::submit_video(state.store.as_ref(), &video_form.to_new_video()) {
        Ok(SubmissionOutcome::Accepted(_)) => AddVideoResponse::Accepted(Redirect::to("/videos")),
        Ok(SubmissionOutcome::Rejected { messages }) => {
            let page = render_add_form(&form_state(&form.context, Some(video_form)), &messages);
            AddVideoResponse::Rejected(RawHtml(page))
        }
        Err(e) => {
            error!("Failed to add video: {e:?}");
            AddVideoResponse::Failed(Status::InternalServerError)
        }
    }
}
