//! User-facing reply rendering.
//!
//! All renderers tolerate partially-shaped provider payloads: missing
//! fields become placeholder text, never a failed reply.

use meteobot_history::HistoryEntry;
use meteobot_weather::{CurrentWeather, Forecast};
use serde_json::Value;

pub const WELCOME: &str = "Hi! Welcome to the Weather Bot.\n\
    Send me a city name and I'll provide you with the current weather information.\n\
    You can also use /help to see more commands.";

pub const HELP: &str = "/start - Start the conversation\n\
    /help - Show this help message\n\
    /history - Show your past weather queries\n\
    /forecast <city> - Get the weather forecast\n\
    Just send a city name to get the weather information for that city.";

pub const WEATHER_FAILED: &str = "Failed to get weather data. Please check the city name.";
pub const FORECAST_FAILED: &str = "Failed to get forecast data. Please check the city name.";
pub const FORECAST_USAGE: &str = "Please provide a city name, e.g., /forecast Moscow";
pub const HISTORY_EMPTY: &str = "Your history is empty!";

const NO_DESCRIPTION: &str = "No description";
const NO_TEMPERATURE: &str = "No temperature data";
const NO_TIMESTAMP: &str = "N/A";

/// At most this many forecast points are shown per reply.
const FORECAST_LIMIT: usize = 5;

/// Capitalize the first letter and lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Three-line current-weather reply: header, description, temperature.
pub fn current_weather(city: &str, weather: &CurrentWeather) -> String {
    let description = weather
        .description()
        .map(capitalize)
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());
    let temperature = weather
        .temperature()
        .map(|t| format!("{t}°C"))
        .unwrap_or_else(|| NO_TEMPERATURE.to_string());

    format!("Weather in {city}:\n{description}\nTemperature: {temperature}")
}

/// One line per stored entry, oldest first.
pub fn history(entries: &[HistoryEntry]) -> String {
    entries.iter().map(history_line).collect::<Vec<_>>().join("\n")
}

fn history_line(entry: &HistoryEntry) -> String {
    let description = entry
        .weather
        .get("weather")
        .and_then(|w| w.get(0))
        .and_then(|w| w.get("description"))
        .and_then(Value::as_str)
        .unwrap_or(NO_DESCRIPTION);
    let temperature = entry
        .weather
        .get("main")
        .and_then(|m| m.get("temp"))
        .and_then(Value::as_number)
        .map(|t| format!("{t}°C"))
        .unwrap_or_else(|| NO_TEMPERATURE.to_string());

    format!("City: {}, Description: {}, Temp: {}", entry.city, description, temperature)
}

/// Header line plus up to the first five forecast points.
pub fn forecast(city: &str, forecast: &Forecast) -> String {
    let mut lines = vec![format!("Weather forecast for {city}:")];
    for point in forecast.points().into_iter().take(FORECAST_LIMIT) {
        let timestamp = point.timestamp.unwrap_or(NO_TIMESTAMP);
        let description = point
            .description
            .map(capitalize)
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        let temperature = point
            .temperature
            .map(|t| format!("{t}°C"))
            .unwrap_or_else(|| NO_TEMPERATURE.to_string());
        lines.push(format!("{timestamp}: {description}, Temp: {temperature}"));
    }
    lines.join("\n")
}
