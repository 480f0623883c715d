use crate::error::VideoResult;
use crate::utils::{extract_youtube_video_id, truncate_chars};
use rocket::form::{self, FromForm};
use std::fmt;

pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_URL_CHARS: usize = 400;
pub const MAX_SEARCH_CHARS: usize = 200;

/// A stored video bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
    pub video_id: String,
}

impl fmt::Display for VideoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notes = self.notes.as_deref().unwrap_or_default();
        write!(
            f,
            "ID: {}, Name: {}, URL: {}, Notes: {}",
            self.id,
            self.name,
            self.url,
            truncate_chars(notes, 200)
        )
    }
}

/// Input for a new record, already shape-checked and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
}

impl NewVideo {
    pub fn new(name: &str, url: &str, notes: Option<&str>) -> Self {
        NewVideo {
            name: name.trim().to_string(),
            url: url.trim().to_string(),
            notes: notes
                .map(str::trim)
                .filter(|notes| !notes.is_empty())
                .map(str::to_string),
        }
    }
}

/// Identifier derived from a watch URL. Only obtainable through extraction,
/// so a stored `video_id` always matches its `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn from_watch_url(url: &str) -> VideoResult<Self> {
        extract_youtube_video_id(url).map(VideoId)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, FromForm)]
pub struct VideoForm {
    #[field(validate = not_blank())]
    #[field(validate = max_chars(MAX_NAME_CHARS))]
    pub name: String,
    #[field(validate = not_blank())]
    #[field(validate = max_chars(MAX_URL_CHARS))]
    pub url: String,
    pub notes: Option<String>,
}

impl VideoForm {
    pub fn to_new_video(&self) -> NewVideo {
        NewVideo::new(&self.name, &self.url, self.notes.as_deref())
    }
}

#[derive(Debug, Default, FromForm)]
pub struct SearchForm {
    pub search_term: Option<String>,
}

impl SearchForm {
    /// The usable search term: trimmed, non-empty and within length limits.
    pub fn term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty() && term.chars().count() <= MAX_SEARCH_CHARS)
    }
}

fn not_blank<'v>(value: &str) -> form::Result<'v, ()> {
    if value.trim().is_empty() {
        Err(form::Error::validation("This field is required."))?;
    }
    Ok(())
}

fn max_chars<'v>(value: &str, max: usize) -> form::Result<'v, ()> {
    let count = value.trim().chars().count();
    if count > max {
        Err(form::Error::validation(format!(
            "Ensure this value has at most {max} characters (it has {count})."
        )))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_video_trims_and_drops_blank_notes() {
        let video = NewVideo::new("  aaa ", " https://www.youtube.com/watch?v=111 ", Some("   "));
        assert_eq!(video.name, "aaa");
        assert_eq!(video.url, "https://www.youtube.com/watch?v=111");
        assert_eq!(video.notes, None);

        let video = NewVideo::new("aaa", "url", Some(" hello "));
        assert_eq!(video.notes.as_deref(), Some("hello"));
    }

    #[test]
    fn search_term_is_trimmed_and_optional() {
        let form = |term: Option<&str>| SearchForm {
            search_term: term.map(str::to_string),
        };
        assert_eq!(form(None).term(), None);
        assert_eq!(form(Some("   ")).term(), None);
        assert_eq!(form(Some(" vikings ")).term(), Some("vikings"));
        assert_eq!(form(Some(&"x".repeat(201))).term(), None);
    }

    #[test]
    fn display_truncates_notes() {
        let record = VideoRecord {
            id: 7,
            name: "aaa".to_string(),
            url: "https://www.youtube.com/watch?v=111".to_string(),
            notes: Some("n".repeat(250)),
            video_id: "111".to_string(),
        };
        let text = record.to_string();
        assert!(text.starts_with("ID: 7, Name: aaa, URL: https://www.youtube.com/watch?v=111, Notes: "));
        assert!(text.ends_with(&"n".repeat(200)));
        assert!(!text.ends_with(&"n".repeat(201)));
    }

    #[test]
    fn video_id_comes_from_url() {
        let id = VideoId::from_watch_url("https://www.youtube.com/watch?v=DCIlwPIISS8").unwrap();
        assert_eq!(id.as_str(), "DCIlwPIISS8");
        assert!(VideoId::from_watch_url("https://www.github.com").is_err());
    }
}
