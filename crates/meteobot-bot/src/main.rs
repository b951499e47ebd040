use std::sync::Arc;

use anyhow::Result;

use meteobot_core::{Config, Coordinator};
use meteobot_history::HistoryStore;
use meteobot_weather::WeatherClient;

mod telegram;

#[tokio::main]
async fn main() -> Result<()> {
    meteobot_core::init()?;

    let config = Config::from_env()?;
    let weather = WeatherClient::new(config.weather_api_key.clone())?;
    let history = Arc::new(HistoryStore::open(&config.history_path));
    let coordinator = Coordinator::new(weather, history);

    tracing::info!(
        "meteobot started, history file: {}",
        config.history_path.display()
    );

    let transport = telegram::BotTransport::new(&config.bot_token)?;
    transport.run(&coordinator).await
}
