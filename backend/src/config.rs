use crate::services::video_store::SqliteVideoStore;
use crate::AppState;
use anyhow::Result;
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use std::env;

lazy_static! {
    pub static ref DATABASE_PATH: String =
        env::var("DATABASE_PATH").unwrap_or_else(|_| "videos.db".to_string());
    pub static ref APP_NAME: String =
        env::var("APP_NAME").unwrap_or_else(|_| "Football Videos".to_string());
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("Starting video collection backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_app_state() -> Result<AppState> {
    let store = SqliteVideoStore::open(DATABASE_PATH.as_str())?;

    Ok(AppState {
        store: Box::new(store),
        app_name: APP_NAME.clone(),
    })
}
