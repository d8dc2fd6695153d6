use bot::BotService;
use config::{build_config, SecretStore};

extern crate pretty_env_logger;
#[macro_use]
extern crate log;
#[macro_use]
extern crate rust_i18n;

mod bot;
mod command;
mod config;
mod error;
mod handler;
mod platform;
mod service;
mod state;
mod utils;

#[cfg(test)]
mod tests;

i18n!("locales", fallback = "en");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine, the environment may already carry everything
    let _ = dotenvy::dotenv();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    let _ = pretty_env_logger::try_init_timed();

    info!("Starting bot...");

    let config = build_config(&SecretStore::from_env())?;

    rust_i18n::set_locale(config.language.as_str());

    let bot_service = BotService::new(&config)?;

    info!("🤖 Bot started!");

    bot_service.start().await?;

    Ok(())
}
