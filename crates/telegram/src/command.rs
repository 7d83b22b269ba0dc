//! Slash-command parsing.

/// Commands the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Register,
    Unregister,
}

impl Command {
    /// Parse the leading `/command` of a message text.
    ///
    /// `/command@name` is accepted only when `name` matches `bot_username`
    /// (case-insensitive). Without a configured username the suffix is not
    /// checked. Anything after the command token is ignored.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let token = text.split_whitespace().next()?;
        let body = token.strip_prefix('/')?;

        let (name, addressee) = match body.split_once('@') {
            Some((name, addressee)) => (name, Some(addressee)),
            None => (body, None),
        };

        if let (Some(addressee), Some(username)) = (addressee, bot_username) {
            if !addressee.eq_ignore_ascii_case(username) {
                return None;
            }
        }

        match name {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "register" => Some(Self::Register),
            "unregister" => Some(Self::Unregister),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Register => "register",
            Self::Unregister => "unregister",
        }
    }
}
