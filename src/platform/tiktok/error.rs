#[derive(Debug, thiserror::Error)]
pub enum TikTokError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("API returned code {code}: {msg}")]
    ApiError { code: i64, msg: String },
    #[error("Unexpected response: {0}")]
    ParsingError(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
