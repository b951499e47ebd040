use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable holding the Telegram bot token.
pub const BOT_TOKEN_VAR: &str = "METEOBOT_TELEGRAM_TOKEN";
/// Environment variable holding the OpenWeatherMap API key.
pub const WEATHER_KEY_VAR: &str = "METEOBOT_OPENWEATHER_KEY";
/// Environment variable overriding where query history is persisted.
pub const HISTORY_FILE_VAR: &str = "METEOBOT_HISTORY_FILE";

const DEFAULT_HISTORY_FILE: &str = "history.json";

/// Runtime configuration: two secrets plus the history file location.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub weather_api_key: String,
    pub history_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Both secrets are required; the history path falls back to
    /// `history.json` in the working directory.
    pub fn from_env() -> Result<Self> {
        let bot_token = std::env::var(BOT_TOKEN_VAR)
            .with_context(|| format!("{BOT_TOKEN_VAR} is not set"))?;
        let weather_api_key = std::env::var(WEATHER_KEY_VAR)
            .with_context(|| format!("{WEATHER_KEY_VAR} is not set"))?;
        let history_path = std::env::var(HISTORY_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_HISTORY_FILE));

        Ok(Self {
            bot_token,
            weather_api_key,
            history_path,
        })
    }
}
