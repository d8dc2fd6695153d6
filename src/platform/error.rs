use super::tiktok::TikTokError;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("TikTok error: {0}")]
    TikTok(#[from] TikTokError),
}
