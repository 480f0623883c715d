pub mod video_service;
pub mod video_store;
