use reqwest::StatusCode;
use teloxide::utils::markdown::{bold, escape};

use crate::utils::truncate_chars;

/// Telegram rejects captions over 1024 characters, so each field is capped.
const MAX_CAPTION_FIELD_CHARS: usize = 300;
const MAX_AUTHOR_CHARS: usize = 100;

/// A video the resolution service knows how to serve directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVideo {
    pub media_url: Option<String>,
    pub title: String,
    pub description: String,
    pub author: String,
}

impl ResolvedVideo {
    /// Caption in MarkdownV2. Field values are escaped, labels come from the locale.
    pub fn caption(&self) -> String {
        fn line(emoji: &str, label: &str, value: &str) -> String {
            format!("{} {} {}", emoji, bold(&escape(&format!("{}:", label))), escape(value))
        }

        [
            line(
                "📹",
                &t!("media.caption.title"),
                &truncate_chars(&self.title, MAX_CAPTION_FIELD_CHARS),
            ),
            line(
                "📝",
                &t!("media.caption.description"),
                &truncate_chars(&self.description, MAX_CAPTION_FIELD_CHARS),
            ),
            line(
                "👤",
                &t!("media.caption.author"),
                &truncate_chars(&self.author, MAX_AUTHOR_CHARS),
            ),
        ]
        .join("\n\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Fetched(Vec<u8>),
    /// The media host answered with something other than 200 OK.
    Status(StatusCode),
}

/// Terminal state of one download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadState {
    Delivered,
    Unresolved,
    FetchFailed(StatusCode),
}
