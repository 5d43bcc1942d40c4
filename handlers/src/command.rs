//! Recognition of the subscription commands.

/// `/start@<bot>` or `/stop@<bot>`. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionCommand {
    Start,
    Stop,
}

impl SubscriptionCommand {
    /// Parses `text` against the bot's mention form, e.g. `/start@RelayUpBot`.
    pub fn parse(text: &str, bot_username: &str) -> Option<Self> {
        let (command, mention) = text.split_once('@')?;
        if mention != bot_username {
            return None;
        }
        match command {
            "/start" => Some(Self::Start),
            "/stop" => Some(Self::Stop),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}
