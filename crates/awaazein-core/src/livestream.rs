//! Livestream link normalization
//!
//! Admins paste whatever link their browser gives them; only the video ID is
//! stored. Accepted shapes (case-insensitive, scheme and `www.` optional):
//!
//! - `youtube.com/watch?v=<ID>[&...]`
//! - `youtu.be/<ID>[?...]`
//! - `youtube.com/embed/<ID>[?...]`

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::{Error, Result};

/// Patterns in priority order; capture group 1 is the video ID
static VIDEO_ID_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(?:https?://)?(?:www\.)?youtube\.com/watch\?v=([^&?\s]+)")
            .expect("watch pattern is valid"),
        Regex::new(r"(?i)(?:https?://)?(?:www\.)?youtu\.be/([^&?\s]+)")
            .expect("short link pattern is valid"),
        Regex::new(r"(?i)(?:https?://)?(?:www\.)?youtube\.com/embed/([^&?\s]+)")
            .expect("embed pattern is valid"),
    ]
});

const EMBED_BASE: &str = "https://www.youtube.com/embed/";
const WATCH_BASE: &str = "https://www.youtube.com/watch";

/// Extract the video ID from a pasted link.
///
/// Returns `None` when no accepted shape matches; callers treat that as a
/// validation failure.
pub fn extract_video_id(raw_link: &str) -> Option<String> {
    let cleaned = raw_link.trim();
    if cleaned.is_empty() {
        return None;
    }

    VIDEO_ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(cleaned)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Like [`extract_video_id`] but reports failure as [`Error::InvalidLivestreamLink`]
pub fn parse_video_id(raw_link: &str) -> Result<String> {
    extract_video_id(raw_link).ok_or_else(|| Error::invalid_link(raw_link.trim()))
}

/// Player URL for an inline, autoplaying embed
pub fn embed_url(video_id: &str) -> Result<Url> {
    let base = format!("{EMBED_BASE}{video_id}");
    Url::parse_with_params(&base, &[("autoplay", "1"), ("playsinline", "1")])
        .map_err(|_| Error::invalid_link(video_id))
}

/// Canonical watch page URL
pub fn watch_url(video_id: &str) -> Result<Url> {
    Url::parse_with_params(WATCH_BASE, &[("v", video_id)]).map_err(|_| Error::invalid_link(video_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_with_timestamp() {
        assert_eq!(
            extract_video_id("https://youtu.be/abc123?t=5"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_watch_link_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=XYZ&list=1"),
            Some("XYZ".to_string())
        );
    }

    #[test]
    fn test_embed_link() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/live_42?autoplay=1"),
            Some("live_42".to_string())
        );
    }

    #[test]
    fn test_scheme_and_www_optional() {
        assert_eq!(
            extract_video_id("youtube.com/watch?v=noScheme"),
            Some("noScheme".to_string())
        );
        assert_eq!(
            extract_video_id("http://youtu.be/plainHttp"),
            Some("plainHttp".to_string())
        );
        assert_eq!(
            extract_video_id("www.youtube.com/embed/wwwOnly"),
            Some("wwwOnly".to_string())
        );
    }

    #[test]
    fn test_case_insensitive_host_preserves_id_case() {
        assert_eq!(
            extract_video_id("HTTPS://WWW.YOUTUBE.COM/WATCH?V=MiXeD"),
            Some("MiXeD".to_string())
        );
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            extract_video_id("  \n https://youtu.be/trimmed \t"),
            Some("trimmed".to_string())
        );
    }

    #[test]
    fn test_rejects_non_links() {
        assert_eq!(extract_video_id("not a url"), None);
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("   "), None);
        assert_eq!(extract_video_id("https://vimeo.com/12345"), None);
        assert_eq!(extract_video_id("https://youtube.com/watch?v="), None);
    }

    #[test]
    fn test_watch_pattern_wins_over_embed() {
        let link = "https://youtube.com/watch?v=first&next=youtube.com/embed/second";
        assert_eq!(extract_video_id(link), Some("first".to_string()));
    }

    #[test]
    fn test_parse_video_id_error() {
        let err = parse_video_id(" nope ").unwrap_err();
        assert!(matches!(err, Error::InvalidLivestreamLink { ref link } if link == "nope"));
    }

    #[test]
    fn test_embed_and_watch_urls() {
        assert_eq!(
            embed_url("abc123").unwrap().as_str(),
            "https://www.youtube.com/embed/abc123?autoplay=1&playsinline=1"
        );
        assert_eq!(
            watch_url("abc123").unwrap().as_str(),
            "https://www.youtube.com/watch?v=abc123"
        );
    }
}
