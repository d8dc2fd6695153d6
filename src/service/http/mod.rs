use std::time::Duration;

use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, Response,
};
use serde::Serialize;

use crate::config::HttpConfig;
use crate::utils::http::{build_client, DEFAULT_USER_AGENT};

/// Shared client for everything that is not the Telegram API: the resolver
/// service and the media hosts. Timeouts are set per request.
#[derive(Clone)]
pub struct HttpService {
    client: Client,
}

impl HttpService {
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let builder = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .default_headers(headers)
            .user_agent(DEFAULT_USER_AGENT);

        let client = build_client(builder, config.proxy_url.as_deref())?;

        Ok(Self { client })
    }

    #[cfg(test)]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, url: &str, timeout: Duration) -> Result<Response, reqwest::Error> {
        self.client.get(url).timeout(timeout).send().await
    }

    pub async fn post_form<T: Serialize + ?Sized>(
        &self,
        url: &str,
        form: &T,
        timeout: Duration,
    ) -> Result<Response, reqwest::Error> {
        self.client.post(url).form(form).timeout(timeout).send().await
    }
}
