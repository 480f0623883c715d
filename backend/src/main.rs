mod api;
mod config;
mod error;
mod models;
mod services;
mod utils;
mod views;

#[cfg(test)]
mod tests;

use rocket::{routes, Build, Rocket};
use services::video_store::VideoStore;

pub struct AppState {
    pub store: Box<dyn VideoStore>,
    pub app_name: String,
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build().manage(state).mount(
        "/",
        routes![
            api::index,
            api::add_video_form,
            api::add_video,
            api::list_videos,
            api::search_videos,
        ],
    )
}

#[rocket::launch]
fn rocket() -> _ {
    config::load_environment();
    config::init_logger();

    let state = config::create_app_state().expect("Failed to set up video storage.");
    build_rocket(state)
}
