use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::platform::ResolvedVideo;

use super::util::{contains_tiktok_link, extract_tiktok_id, extract_tiktok_url};

/// A TikTok link found in a user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TikTokLink {
    pub url: String,
    pub id: Option<String>,
}

impl TikTokLink {
    pub fn parse(text: &str) -> Option<Self> {
        if !contains_tiktok_link(text) {
            return None;
        }

        Some(Self {
            url: extract_tiktok_url(text).unwrap_or_else(|| text.trim().to_string()),
            id: extract_tiktok_id(text),
        })
    }
}

// ------------------------------------------------------------

pub const SUCCESS_CODE: i64 = 0;

#[derive(Debug, Clone, Deserialize)]
pub struct TikwmResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    /// Only meaningful on success; failed lookups put arbitrary values here.
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TikwmVideo {
    /// Logged only. The service has sent it both as a string and as a number.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub play: Option<String>,
    #[serde(default)]
    pub hdplay: Option<String>,
    #[serde(default)]
    pub author: Option<TikwmAuthor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TikwmAuthor {
    #[serde(default)]
    pub nickname: Option<String>,
}

impl TikwmVideo {
    /// Prefers the HD stream. Paths relative to the service are resolved against `base`.
    pub fn media_url(&self, base: &Url) -> Option<String> {
        [self.hdplay.as_deref(), self.play.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .map(|url| {
                if url.starts_with('/') {
                    base.join(url).map(|joined| joined.to_string()).unwrap_or_else(|_| url.to_string())
                } else {
                    url.to_string()
                }
            })
    }

    pub fn into_resolved_video(self, base: &Url) -> ResolvedVideo {
        let media_url = self.media_url(base);

        ResolvedVideo {
            media_url,
            description: self
                .title
                .clone()
                .unwrap_or_else(|| t!("media.no_description").to_string()),
            title: self.title.unwrap_or_else(|| t!("media.no_title").to_string()),
            author: self
                .author
                .and_then(|author| author.nickname)
                .unwrap_or_else(|| t!("media.unknown_author").to_string()),
        }
    }
}
