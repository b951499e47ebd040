//! OpenWeatherMap client for meteobot.
//!
//! A thin wrapper over the provider's current-weather and forecast endpoints.
//! Responses are kept as raw JSON so the history store can persist them
//! verbatim; typed accessors on the wrappers stay lenient about shape.

pub mod client;
pub mod response;

pub use client::{WeatherClient, WeatherError};
pub use response::{CurrentWeather, Forecast, ForecastPoint};
