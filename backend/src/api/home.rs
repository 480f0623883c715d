use crate::views::render_home;
use crate::AppState;
use rocket::response::content::RawHtml;
use rocket::{get, State};

#[get("/")]
pub fn index(state: &State<AppState>) -> RawHtml<String> {
    RawHtml(render_home(&state.app_name))
}
