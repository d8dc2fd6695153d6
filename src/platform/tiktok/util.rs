use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;

const TIKTOK_DOMAINS: [&str; 3] = ["tiktok.com", "vm.tiktok", "vt.tiktok"];

/// Known TikTok URL shapes, most specific first.
static TIKTOK_ID_REGEXES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"tiktok\.com/@[\w.-]+/video/(\d+)",
        r"tiktok\.com/v/(\d+)",
        r"vm\.tiktok\.com/([\w\d]+)",
        r"vt\.tiktok\.com/([\w\d]+)",
    ]
    .map(|pattern| {
        Regex::new(pattern)
            .context("Failed to create TikTok id regex")
            .unwrap()
    })
});

pub fn contains_tiktok_link(text: &str) -> bool {
    TIKTOK_DOMAINS.iter().any(|domain| text.contains(domain))
}

/// Video id or short-link code. Advisory only: a link may be recognized
/// without any of the known shapes matching.
pub fn extract_tiktok_id(text: &str) -> Option<String> {
    TIKTOK_ID_REGEXES
        .iter()
        .find_map(|regex| regex.captures(text))
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

/// First whitespace-separated token that looks like a TikTok link, without
/// the punctuation people tend to wrap links in.
pub fn extract_tiktok_url(text: &str) -> Option<String> {
    text.split_whitespace()
        .find(|token| contains_tiktok_link(token))
        .map(|token| {
            token
                .trim_start_matches(|c: char| matches!(c, '(' | '<' | '[' | '"' | '\'' | '«'))
                .trim_end_matches(|c: char| matches!(c, ')' | '>' | ']' | '"' | '\'' | '»' | ',' | '.' | '!' | '?' | ';'))
                .to_string()
        })
        .filter(|url| !url.is_empty())
}
