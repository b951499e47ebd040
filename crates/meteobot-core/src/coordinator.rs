//! Wires chat events to the weather provider and the history store.

use std::sync::Arc;

use anyhow::{Context, Result};

use meteobot_history::HistoryStore;
use meteobot_weather::WeatherClient;

use crate::event::Event;
use crate::render;

/// Request/response orchestrator: one incoming chat event in, one reply out.
///
/// Constructed with its collaborators and handed to the transport binding
/// directly; there is no shared handler registry. Provider failures become
/// ordinary replies. An `Err` from [`Coordinator::handle`] means history
/// could not be persisted and the process should stop.
#[derive(Clone)]
pub struct Coordinator {
    weather: WeatherClient,
    history: Arc<HistoryStore>,
}

impl Coordinator {
    pub fn new(weather: WeatherClient, history: Arc<HistoryStore>) -> Self {
        Self { weather, history }
    }

    /// Handle one chat event for `user_id` and produce the reply text.
    pub async fn handle(&self, user_id: &str, event: Event) -> Result<String> {
        match event {
            Event::Start => Ok(render::WELCOME.to_string()),
            Event::Help => Ok(render::HELP.to_string()),
            Event::History => Ok(self.handle_history(user_id)),
            Event::Forecast(city) => self.handle_forecast(&city).await,
            Event::CityLookup(city) => self.handle_current_weather(user_id, &city).await,
        }
    }

    async fn handle_current_weather(&self, user_id: &str, city: &str) -> Result<String> {
        let weather = match self.weather.current_weather(city).await {
            Ok(weather) => weather,
            Err(e) => {
                tracing::warn!("Current weather lookup for {city:?} failed: {e}");
                return Ok(render::WEATHER_FAILED.to_string());
            }
        };
        if !weather.is_success() {
            tracing::debug!("Provider rejected city {city:?}");
            return Ok(render::WEATHER_FAILED.to_string());
        }

        let reply = render::current_weather(city, &weather);

        // Only successful current-weather lookups are recorded; forecasts
        // and failures never touch the store.
        let history = self.history.clone();
        let user_id = user_id.to_string();
        let city = city.to_string();
        let payload = weather.into_raw();
        tokio::task::spawn_blocking(move || history.record_query(&user_id, &city, payload))
            .await
            .context("History write task panicked")?
            .context("Failed to record weather query")?;

        Ok(reply)
    }

    fn handle_history(&self, user_id: &str) -> String {
        let entries = self.history.history(user_id);
        if entries.is_empty() {
            render::HISTORY_EMPTY.to_string()
        } else {
            render::history(&entries)
        }
    }

    async fn handle_forecast(&self, city: &str) -> Result<String> {
        // Caught before any network call.
        if city.is_empty() {
            return Ok(render::FORECAST_USAGE.to_string());
        }

        let forecast = match self.weather.forecast(city).await {
            Ok(forecast) => forecast,
            Err(e) => {
                tracing::warn!("Forecast lookup for {city:?} failed: {e}");
                return Ok(render::FORECAST_FAILED.to_string());
            }
        };
        if !forecast.is_success() {
            tracing::debug!("Provider rejected forecast city {city:?}");
            return Ok(render::FORECAST_FAILED.to_string());
        }

        Ok(render::forecast(city, &forecast))
    }
}
