use std::time::Duration;

use anyhow::Context;
use teloxide::Bot;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Bot backed by a client whose timeout covers video uploads, which take far
/// longer than ordinary API calls.
pub fn create_telegram_bot(token: &str, timeout: Duration) -> anyhow::Result<Bot> {
    let client = teloxide::net::default_reqwest_settings()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(60))
        .tcp_keepalive(Duration::from_secs(30))
        .user_agent("TelegramBot/1.0")
        .build()
        .context("Failed to build Telegram client")?;

    Ok(Bot::with_client(token, client))
}

pub fn build_client(builder: reqwest::ClientBuilder, proxy_url: Option<&str>) -> Result<reqwest::Client, reqwest::Error> {
    let builder = match proxy_url {
        Some(proxy_url) => {
            info!("Configuring client with proxy");
            builder.proxy(reqwest::Proxy::all(proxy_url)?)
        }
        None => builder,
    };

    builder.build()
}
