use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::BotResult;
use crate::platform::{HttpMediaFetcher, MediaFetcher, PlatformError, TikwmResolver, VideoResolver};
use crate::service::http::HttpService;

/// Services shared by every handler. Built once at startup and handed to the
/// dispatcher as a dependency, so tests can swap in their own implementations.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn VideoResolver>,
    pub fetcher: Arc<dyn MediaFetcher>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> BotResult<Self> {
        let http_service = HttpService::new(&config.http).map_err(PlatformError::from)?;

        let resolver = TikwmResolver::new(http_service.clone(), &config.tikwm).map_err(PlatformError::from)?;
        let fetcher = HttpMediaFetcher::new(http_service, config.http.fetch_timeout);

        Ok(Self {
            resolver: Arc::new(resolver),
            fetcher: Arc::new(fetcher),
        })
    }
}
