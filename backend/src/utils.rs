use crate::error::{InvalidUrlReason, VideoError, VideoResult};
use url::Url;

pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch";
pub const MAX_VIDEO_ID_CHARS: usize = 40;

/// Extract the `v` parameter from a YouTube watch URL.
///
/// The URL must start with `https://www.youtube.com/watch` and carry a query
/// string that parses strictly. When `v` is repeated the first value wins,
/// and that value must not be empty.
pub fn extract_youtube_video_id(url: &str) -> VideoResult<String> {
    let invalid = |reason| VideoError::invalid_url(url, reason);

    if !url.starts_with(WATCH_URL_PREFIX) {
        return Err(invalid(InvalidUrlReason::NotWatchUrl));
    }

    let parsed_url = Url::parse(url).map_err(|_| invalid(InvalidUrlReason::NotWatchUrl))?;
    let query = match parsed_url.query() {
        Some(query) if !query.is_empty() => query,
        _ => return Err(invalid(InvalidUrlReason::MissingQuery)),
    };

    let pairs = parse_query_strict(query)
        .map_err(|message| invalid(InvalidUrlReason::MalformedQuery(message)))?;

    let video_id = pairs
        .into_iter()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value)
        .ok_or_else(|| invalid(InvalidUrlReason::MissingVideoId))?;

    if video_id.is_empty() {
        return Err(invalid(InvalidUrlReason::EmptyVideoId));
    }
    if video_id.chars().count() > MAX_VIDEO_ID_CHARS {
        return Err(invalid(InvalidUrlReason::VideoIdTooLong(MAX_VIDEO_ID_CHARS)));
    }

    Ok(video_id)
}

/// Parse an `application/x-www-form-urlencoded` query string, failing on
/// anything malformed instead of skipping it.
///
/// Every `&`-separated segment must contain `=`. Pairs with an empty value
/// are kept.
pub fn parse_query_strict(query: &str) -> Result<Vec<(String, String)>, String> {
    let mut pairs = Vec::new();

    for segment in query.split('&') {
        let Some((key, value)) = segment.split_once('=') else {
            return Err(format!("bad query field {segment:?}"));
        };
        pairs.push((decode_component(key)?, decode_component(value)?));
    }

    Ok(pairs)
}

fn decode_component(component: &str) -> Result<String, String> {
    let bytes = component.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let is_escape = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !is_escape {
                return Err(format!("bad percent-encoding in {component:?}"));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| format!("invalid UTF-8 in {component:?}"))
}

/// Human readable count for the listing page.
pub fn video_count_message(count: usize) -> String {
    match count {
        0 => "No videos".to_string(),
        1 => "1 Video".to_string(),
        n => format!("{n} Videos"),
    }
}

/// Truncate to at most `max` characters without splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
