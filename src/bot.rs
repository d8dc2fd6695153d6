use teloxide::prelude::*;
use teloxide::Bot;

use crate::config::AppConfig;
use crate::error::BotResult;
use crate::handler::get_handler;
use crate::state::AppState;
use crate::utils::http;

pub struct BotService {
    pub bot: Bot,
    pub state: AppState,
}

impl BotService {
    pub fn new(config: &AppConfig) -> BotResult<Self> {
        info!("Initializing AppState...");
        let state = AppState::new(config)?;
        info!("AppState initialized");

        let bot = http::create_telegram_bot(&config.telegram.token, config.telegram.timeout)?;

        Ok(Self { bot, state })
    }

    pub async fn start(self) -> BotResult<()> {
        info!("Testing connection to Telegram API...");
        match self.bot.get_me().await {
            Ok(me) => info!("Successfully connected to Telegram API as @{}", me.username()),
            Err(e) => {
                error!("Failed to connect to Telegram API: {:?}", e);
                return Err(anyhow::anyhow!("Failed to connect to Telegram API: {}", e).into());
            }
        }

        crate::command::setup_user_commands(&self.bot).await?;

        Dispatcher::builder(self.bot, get_handler())
            .dependencies(dptree::deps![self.state])
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Bot stopped");

        Ok(())
    }
}
