use teloxide::{macros::BotCommands, prelude::Requester, types::BotCommand, Bot, RequestError};

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    Start,
    Help,
}

impl Command {
    pub fn user_commands() -> Vec<BotCommand> {
        vec![
            BotCommand::new("start", t!("commands.description.start")),
            BotCommand::new("help", t!("commands.description.help")),
        ]
    }
}

pub async fn setup_user_commands(bot: &Bot) -> Result<(), RequestError> {
    bot.delete_my_commands().await?;
    bot.set_my_commands(Command::user_commands()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use teloxide::utils::command::BotCommands;

    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/start", "tokstash_bot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/help@tokstash_bot", "tokstash_bot").unwrap(), Command::Help);
        assert!(Command::parse("/download", "tokstash_bot").is_err());
    }

    #[test]
    fn test_user_commands() {
        let commands = Command::user_commands();
        assert_eq!(
            commands.iter().map(|c| c.command.as_str()).collect::<Vec<_>>(),
            vec!["start", "help"]
        );
        assert!(commands.iter().all(|c| !c.description.is_empty()));
    }
}
