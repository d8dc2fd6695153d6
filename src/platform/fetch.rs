use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::service::http::HttpService;

use super::{FetchOutcome, MediaFetcher, PlatformError};

pub struct HttpMediaFetcher {
    http_service: HttpService,
    timeout: Duration,
}

impl HttpMediaFetcher {
    pub fn new(http_service: HttpService, timeout: Duration) -> Self {
        Self { http_service, timeout }
    }
}

#[async_trait]
impl MediaFetcher for HttpMediaFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutcome, PlatformError> {
        let response = self.http_service.get(url, self.timeout).await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(FetchOutcome::Status(status));
        }

        let bytes = response.bytes().await?;
        info!("Fetched {} bytes of media", bytes.len());

        Ok(FetchOutcome::Fetched(bytes.to_vec()))
    }
}
