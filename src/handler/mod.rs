mod command;
mod message;

use command::get_command_handler;
use message::get_message_handler;
use teloxide::{dispatching::UpdateHandler, dptree};

pub fn get_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(get_command_handler())
        .branch(get_message_handler())
}
