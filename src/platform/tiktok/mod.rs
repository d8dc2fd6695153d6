mod error;
pub mod model;
mod util;

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

pub use error::*;
pub use model::TikTokLink;

use crate::{config::TikwmConfig, service::http::HttpService};

use super::{ResolvedVideo, VideoResolver};
use model::{TikwmResponse, TikwmVideo, SUCCESS_CODE};

/// Resolves share links through the tikwm.com API.
pub struct TikwmResolver {
    http_service: HttpService,
    api_url: Url,
    timeout: Duration,
}

impl TikwmResolver {
    pub fn new(http_service: HttpService, config: &TikwmConfig) -> Result<Self, TikTokError> {
        let api_url = Url::parse(&config.api_url).map_err(|_| TikTokError::InvalidUrl(config.api_url.clone()))?;

        Ok(Self {
            http_service,
            api_url,
            timeout: config.resolve_timeout,
        })
    }

    pub async fn fetch_video_info(&self, link: &str) -> Result<ResolvedVideo, TikTokError> {
        let response = self
            .http_service
            .post_form(self.api_url.as_str(), &[("url", link), ("hd", "1")], self.timeout)
            .await?;

        let body: TikwmResponse = response.json().await?;

        if body.code != SUCCESS_CODE {
            return Err(TikTokError::ApiError {
                code: body.code,
                msg: body.msg.unwrap_or_default(),
            });
        }

        let video = match body.data {
            Some(data) => serde_json::from_value::<TikwmVideo>(data)
                .map_err(|e| TikTokError::ParsingError(format!("Failed to deserialize video: {}", e)))?,
            None => TikwmVideo::default(),
        };

        if let Some(id) = &video.id {
            info!("Resolved TikTok video {}", id);
        }

        Ok(video.into_resolved_video(&self.api_url))
    }
}

#[async_trait]
impl VideoResolver for TikwmResolver {
    async fn resolve(&self, link: &str) -> Option<ResolvedVideo> {
        match self.fetch_video_info(link).await {
            Ok(video) => Some(video),
            Err(e) => {
                warn!("Failed to resolve {}: {}", link, e);
                None
            }
        }
    }
}
