//! Handlers composing the bot's chain: logging, `/start`·`/menu`, and free-text conversion.

mod conversion;
mod logging;
mod menu;

pub use conversion::{
    format_conversion_reply, ConversionHandler, MSG_AI_UNAVAILABLE, MSG_EMPTY_CHAT_REPLY,
    MSG_PARSE_FAILED,
};
pub use logging::LoggingHandler;
pub use menu::{MenuHandler, MENU_BUTTON_TEXT, MENU_GREETING};
