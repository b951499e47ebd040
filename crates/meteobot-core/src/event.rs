/// A chat event, after message text has been parsed down to
/// "command + remainder".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `/start`
    Start,
    /// `/help`
    Help,
    /// `/history`
    History,
    /// `/forecast <city>`; the remainder may be empty.
    Forecast(String),
    /// Any non-command text, treated as a city name.
    CityLookup(String),
}

impl Event {
    /// Map raw message text to an event.
    ///
    /// Unknown slash commands and empty messages map to `None` and are
    /// ignored by the transport.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let Some(rest) = text.strip_prefix('/') else {
            return Some(Self::CityLookup(text.to_string()));
        };

        let (command, remainder) = match rest.split_once(char::is_whitespace) {
            Some((command, remainder)) => (command, remainder.trim()),
            None => (rest, ""),
        };
        // In group chats Telegram suffixes commands with "@botname".
        let command = command.split('@').next().unwrap_or(command);

        match command {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "history" => Some(Self::History),
            "forecast" => Some(Self::Forecast(remainder.to_string())),
            _ => None,
        }
    }
}
