//! Bot commands recognized by the menu handler and registered with Telegram at startup.

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "открыть калькулятор валют")]
    Start,
    #[command(description = "показать меню")]
    Menu,
}

impl Command {
    /// Parses the first word of `text` as a command. `/start@name` is accepted when `name` matches
    /// `bot_username`, or for any name while the username is still unknown. Arguments (e.g. deep-link
    /// payloads after `/start`) are ignored.
    pub fn from_text(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        match bot_username {
            Some(name) => Self::parse(first, name).ok(),
            None => {
                let bare = first.split('@').next().unwrap_or(first);
                Self::parse(bare, "").ok()
            }
        }
    }
}
