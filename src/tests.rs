use reqwest::StatusCode;

use crate::platform::ResolvedVideo;
use crate::utils::test::{sample_video, setup_test_bot, StubFetch, StubFetcher, StubResolver};

const LINK: &str = "https://vm.tiktok.com/ZMabc123/";

#[tokio::test]
async fn test_start_command() {
    let mut bot = setup_test_bot(
        "/start",
        StubResolver::new(Some(sample_video())),
        StubFetcher::new(StubFetch::Bytes(vec![0, 1, 2])),
    );

    bot.dispatch().await;

    let responses = bot.get_responses();
    let message = responses.sent_messages.last().expect("No sent messages were detected!");
    assert_eq!(message.text(), Some(&*t!("commands.start")));
    assert_eq!(responses.sent_messages.len(), 1);
}

#[tokio::test]
async fn test_help_command() {
    let mut bot = setup_test_bot(
        "/help",
        StubResolver::new(None),
        StubFetcher::new(StubFetch::Bytes(vec![])),
    );

    bot.dispatch().await;

    let responses = bot.get_responses();
    let message = responses.sent_messages.last().expect("No sent messages were detected!");
    assert_eq!(message.text(), Some(&*t!("commands.help")));
}

#[tokio::test]
async fn test_unknown_command() {
    let resolver = StubResolver::new(Some(sample_video()));
    let mut bot = setup_test_bot("/download", resolver.clone(), StubFetcher::new(StubFetch::Bytes(vec![])));

    bot.dispatch().await;

    let responses = bot.get_responses();
    let message = responses.sent_messages.last().expect("No sent messages were detected!");
    assert_eq!(message.text(), Some(&*t!("commands.unknown_command")));
    assert_eq!(resolver.calls(), 0);
}

#[tokio::test]
async fn test_not_a_tiktok_link() {
    let resolver = StubResolver::new(Some(sample_video()));
    let fetcher = StubFetcher::new(StubFetch::Bytes(vec![0, 1, 2]));
    let mut bot = setup_test_bot("https://www.instagram.com/reel/ABC123", resolver.clone(), fetcher.clone());

    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.sent_messages.len(), 1);
    assert_eq!(
        responses.sent_messages[0].text(),
        Some(&*t!("messages.download.invalid_url"))
    );
    assert!(responses.edited_messages_text.is_empty());
    assert_eq!(resolver.calls(), 0);
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_download_delivered() {
    let resolver = StubResolver::new(Some(sample_video()));
    let fetcher = StubFetcher::new(StubFetch::Bytes(vec![0, 0, 0, 24, 102, 116, 121, 112]));
    let mut bot = setup_test_bot(&format!("look at this {}", LINK), resolver.clone(), fetcher.clone());

    bot.dispatch().await;

    let responses = bot.get_responses();

    // status message goes out before anything else happens
    assert_eq!(
        responses.sent_messages[0].text(),
        Some(&*t!("messages.download.processing_request"))
    );

    let video = responses
        .sent_messages
        .iter()
        .find(|message| message.video().is_some())
        .expect("No video was sent!");
    let caption = video.caption().expect("Video has no caption");
    assert!(caption.contains("Funny cat"));
    assert!(caption.contains("Funny cat compilation"));
    assert!(caption.contains("Cat Lover"));

    assert_eq!(responses.deleted_messages.len(), 1);
    assert!(responses.edited_messages_text.is_empty());
    assert_eq!(resolver.calls(), 1);
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn test_replies_are_threaded_under_the_link() {
    let text = format!("look at this {}", LINK);
    let mut bot = setup_test_bot(
        &text,
        StubResolver::new(Some(sample_video())),
        StubFetcher::new(StubFetch::Bytes(vec![0, 1, 2])),
    );

    bot.dispatch().await;

    let responses = bot.get_responses();

    let status = &responses.sent_messages_text[0];
    assert!(status.bot_request.reply_parameters.is_some());
    assert_eq!(
        status.message.reply_to_message().and_then(|m| m.text()),
        Some(text.as_str())
    );

    let video = responses.sent_messages_video.last().expect("No video was sent!");
    assert!(video.bot_request.reply_parameters.is_some());
    assert_eq!(
        video.message.reply_to_message().and_then(|m| m.text()),
        Some(text.as_str())
    );
}

#[tokio::test]
async fn test_invalid_link_reply_is_threaded() {
    let mut bot = setup_test_bot(
        "https://www.instagram.com/reel/ABC123",
        StubResolver::new(None),
        StubFetcher::new(StubFetch::Bytes(vec![])),
    );

    bot.dispatch().await;

    let responses = bot.get_responses();
    let reply = responses.sent_messages_text.last().expect("No sent messages were detected!");
    assert!(reply.bot_request.reply_parameters.is_some());
}

#[tokio::test]
async fn test_download_unresolved() {
    let resolver = StubResolver::new(None);
    let fetcher = StubFetcher::new(StubFetch::Bytes(vec![0, 1, 2]));
    let mut bot = setup_test_bot(LINK, resolver.clone(), fetcher.clone());

    bot.dispatch().await;

    let responses = bot.get_responses();
    let edited = responses
        .edited_messages_text
        .last()
        .expect("Status message was not edited");
    assert_eq!(edited.message.text(), Some(&*t!("messages.download.unresolved")));

    assert!(responses.sent_messages.iter().all(|message| message.video().is_none()));
    assert!(responses.deleted_messages.is_empty());
    assert_eq!(resolver.calls(), 1);
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_download_without_media_url() {
    let resolver = StubResolver::new(Some(ResolvedVideo {
        media_url: None,
        ..sample_video()
    }));
    let fetcher = StubFetcher::new(StubFetch::Bytes(vec![0, 1, 2]));
    let mut bot = setup_test_bot(LINK, resolver, fetcher.clone());

    bot.dispatch().await;

    let responses = bot.get_responses();
    let edited = responses
        .edited_messages_text
        .last()
        .expect("Status message was not edited");
    assert_eq!(edited.message.text(), Some(&*t!("messages.download.unresolved")));
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_download_fetch_failed() {
    let fetcher = StubFetcher::new(StubFetch::Status(StatusCode::NOT_FOUND));
    let mut bot = setup_test_bot(LINK, StubResolver::new(Some(sample_video())), fetcher.clone());

    bot.dispatch().await;

    let responses = bot.get_responses();
    let edited = responses
        .edited_messages_text
        .last()
        .expect("Status message was not edited");
    assert_eq!(edited.message.text(), Some(&*t!("messages.download.fetch_failed")));

    assert!(responses.sent_messages.iter().all(|message| message.video().is_none()));
    assert!(responses.deleted_messages.is_empty());
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn test_download_unexpected_error() {
    let mut bot = setup_test_bot(
        LINK,
        StubResolver::new(Some(sample_video())),
        StubFetcher::new(StubFetch::Unreachable),
    );

    bot.dispatch().await;

    let responses = bot.get_responses();
    let edited = responses
        .edited_messages_text
        .last()
        .expect("Status message was not edited");
    let text = edited.message.text().expect("Edited message has no text");

    let prefix = t!("messages.download.error", error = "");
    assert!(text.starts_with(&*prefix));
    assert!(text.len() > prefix.len(), "error description is missing");
    assert!(responses.sent_messages.iter().all(|message| message.video().is_none()));
}

#[tokio::test]
async fn test_same_link_runs_full_pipeline_each_time() {
    let resolver = StubResolver::new(Some(sample_video()));
    let fetcher = StubFetcher::new(StubFetch::Bytes(vec![0, 1, 2]));

    for _ in 0..2 {
        let mut bot = setup_test_bot(LINK, resolver.clone(), fetcher.clone());
        bot.dispatch().await;
    }

    assert_eq!(resolver.calls(), 2);
    assert_eq!(fetcher.calls(), 2);
}
