use crate::models::SearchForm;
use crate::services::video_service;
use crate::views::render_video_list;
use crate::AppState;
use log::{error, info};
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::{get, post, State};

fn render_listing(state: &AppState, search: &SearchForm) -> Result<RawHtml<String>, Status> {
    let term = search.term();
    match video_service::list_videos(state.store.as_ref(), term) {
        Ok(videos) => {
            info!("Listing {} videos (search: {term:?})", videos.len());
            Ok(RawHtml(render_video_list(&videos, term)))
        }
        Err(e) => {
            error!("Failed to list videos: {e:?}");
            Err(Status::InternalServerError)
        }
    }
}

#[get("/videos?<search..>")]
pub fn list_videos(
    state: &State<AppState>,
    search: SearchForm,
) -> Result<RawHtml<String>, Status> {
    render_listing(state, &search)
}

/// The search term may come from the form body or the query string;
/// the body wins when both carry one.
#[post("/videos?<search..>", data = "<form>")]
pub fn search_videos(
    state: &State<AppState>,
    search: SearchForm,
    form: Option<Form<SearchForm>>,
) -> Result<RawHtml<String>, Status> {
    match form.map(Form::into_inner) {
        Some(body) if body.term().is_some() => render_listing(state, &body),
        _ => render_listing(state, &search),
    }
}
