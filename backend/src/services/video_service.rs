use crate::error::{VideoError, VideoResult};
use crate::models::{NewVideo, VideoId, VideoRecord};
use crate::services::video_store::VideoStore;
use log::{info, warn};

pub const CHECK_DATA_MESSAGE: &str = "Please check the data entered.";

/// Derive the video id from the URL, then persist. Nothing is written when
/// the URL is invalid; duplicates are left to the store's constraint.
pub fn create_video(store: &dyn VideoStore, video: &NewVideo) -> VideoResult<VideoRecord> {
    let video_id = VideoId::from_watch_url(&video.url)?;
    store.insert(video, &video_id)
}

/// Filter by a case-insensitive name substring and sort by name ignoring
/// case. The sort is stable so equal names keep insertion order.
pub fn filter_and_sort(videos: Vec<VideoRecord>, search_term: Option<&str>) -> Vec<VideoRecord> {
    let mut videos = match search_term {
        Some(term) => {
            let needle = term.to_lowercase();
            videos
                .into_iter()
                .filter(|video| video.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => videos,
    };
    videos.sort_by_cached_key(|video| video.name.to_lowercase());
    videos
}

pub fn list_videos(
    store: &dyn VideoStore,
    search_term: Option<&str>,
) -> VideoResult<Vec<VideoRecord>> {
    Ok(filter_and_sort(store.all()?, search_term))
}

/// Result of handling one submission from the add form.
#[derive(Debug)]
pub enum SubmissionOutcome {
    Accepted(VideoRecord),
    Rejected { messages: Vec<&'static str> },
}

/// Warnings shown for a rejected submission: the specific failure, if any,
/// followed by the generic prompt.
pub fn rejection_messages(error: Option<&VideoError>) -> Vec<&'static str> {
    error
        .and_then(VideoError::user_message)
        .into_iter()
        .chain(std::iter::once(CHECK_DATA_MESSAGE))
        .collect()
}

/// Run the create pipeline for input that passed field validation.
/// Input errors become a rejection; storage failures are returned as errors.
pub fn submit_video(store: &dyn VideoStore, video: &NewVideo) -> VideoResult<SubmissionOutcome> {
    match create_video(store, video) {
        Ok(record) => {
            info!("Video added: {record}");
            Ok(SubmissionOutcome::Accepted(record))
        }
        Err(e) if e.user_message().is_some() => {
            warn!("Rejected video submission: {e}");
            Ok(SubmissionOutcome::Rejected {
                messages: rejection_messages(Some(&e)),
            })
        }
        Err(e) => Err(e),
    }
}
