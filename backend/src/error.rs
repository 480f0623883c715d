use thiserror::Error;

/// Why a submitted URL was not accepted as a YouTube watch URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUrlReason {
    #[error("not a YouTube watch URL")]
    NotWatchUrl,
    #[error("missing query string")]
    MissingQuery,
    #[error("malformed query string: {0}")]
    MalformedQuery(String),
    #[error("missing `v` parameter")]
    MissingVideoId,
    #[error("empty `v` parameter")]
    EmptyVideoId,
    #[error("video id longer than {0} characters")]
    VideoIdTooLong(usize),
}

#[derive(Debug, Error)]
pub enum VideoError {
    #[error("invalid YouTube URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: InvalidUrlReason },

    #[error("video {video_id} was already added")]
    DuplicateVideoId { video_id: String },

    #[error("video storage failed: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("video storage is unavailable")]
    StorageUnavailable,
}

impl VideoError {
    pub fn invalid_url(url: &str, reason: InvalidUrlReason) -> Self {
        VideoError::InvalidUrl {
            url: url.to_string(),
            reason,
        }
    }

    /// Warning shown to the user, or `None` for backend failures.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            VideoError::InvalidUrl { .. } => Some("Invalid YouTube URL"),
            VideoError::DuplicateVideoId { .. } => Some("You already added this YouTube Video"),
            VideoError::Storage(_) | VideoError::StorageUnavailable => None,
        }
    }
}

pub type VideoResult<T> = Result<T, VideoError>;
