use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::response::{CurrentWeather, Forecast};

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Weather provider errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Client for the OpenWeatherMap current-weather and forecast endpoints.
///
/// Both calls pass the city name through untouched, fetch with metric units,
/// and return the decoded body as-is. There is no retrying and no caching;
/// the provider reports unknown cities inside the body, not via the HTTP
/// status, so callers check `is_success()` on the returned payload.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Build a client with the given OpenWeatherMap API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different provider root. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current conditions for `city`.
    pub async fn current_weather(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let raw = self.fetch("weather", city).await?;
        Ok(CurrentWeather::new(raw))
    }

    /// Fetch the multi-day forecast for `city`.
    pub async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
        let raw = self.fetch("forecast", city).await?;
        Ok(Forecast::new(raw))
    }

    async fn fetch(&self, endpoint: &str, city: &str) -> Result<Value, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(endpoint, city, "querying weather provider");

        let response = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        Ok(response.json().await?)
    }
}
