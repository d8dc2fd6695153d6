use teloxide::{
    prelude::*,
    types::{InputFile, ParseMode, ReplyParameters},
};

use crate::error::{BotResult, HandlerResult};
use crate::platform::{tiktok::TikTokLink, DownloadState, FetchOutcome};
use crate::state::AppState;

pub(super) async fn handle_message_link(bot: Bot, msg: Message, state: AppState) -> HandlerResult<()> {
    let Some(link) = msg.text().and_then(TikTokLink::parse) else {
        bot.send_message(msg.chat.id, t!("messages.download.invalid_url"))
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    };

    info!("Download requested in chat {}: {} (id: {:?})", msg.chat.id.0, link.url, link.id);

    let status_msg = bot
        .send_message(msg.chat.id, t!("messages.download.processing_request"))
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    match process_download(&bot, &msg, &status_msg, &state, &link).await {
        Ok(DownloadState::Delivered) => {
            info!("Delivered {} to chat {}", link.url, msg.chat.id.0);
        }
        Ok(DownloadState::Unresolved) => {
            warn!("Could not resolve {}", link.url);
            bot.edit_message_text(msg.chat.id, status_msg.id, t!("messages.download.unresolved"))
                .await?;
        }
        Ok(DownloadState::FetchFailed(status)) => {
            warn!("Media host answered {} for {}", status, link.url);
            bot.edit_message_text(msg.chat.id, status_msg.id, t!("messages.download.fetch_failed"))
                .await?;
        }
        Err(e) => {
            error!("Failed to process {}: {}", link.url, e);
            bot.edit_message_text(
                msg.chat.id,
                status_msg.id,
                t!("messages.download.error", error = e.to_string()),
            )
            .await?;
        }
    }

    Ok(())
}

async fn process_download(
    bot: &Bot,
    msg: &Message,
    status_msg: &Message,
    state: &AppState,
    link: &TikTokLink,
) -> BotResult<DownloadState> {
    let Some(video) = state.resolver.resolve(&link.url).await else {
        return Ok(DownloadState::Unresolved);
    };

    // a payload without any playable URL is reported like a failed lookup
    let Some(media_url) = video.media_url.as_deref() else {
        return Ok(DownloadState::Unresolved);
    };

    let bytes = match state.fetcher.fetch(media_url).await? {
        FetchOutcome::Fetched(bytes) => bytes,
        FetchOutcome::Status(status) => return Ok(DownloadState::FetchFailed(status)),
    };

    bot.send_video(msg.chat.id, InputFile::memory(bytes).file_name("video.mp4"))
        .caption(video.caption())
        .parse_mode(ParseMode::MarkdownV2)
        .supports_streaming(true)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    bot.delete_message(msg.chat.id, status_msg.id).await?;

    Ok(DownloadState::Delivered)
}
