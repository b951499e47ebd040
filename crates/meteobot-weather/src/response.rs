//! Raw provider payloads with lenient accessors.
//!
//! OpenWeatherMap signals success through a `cod` field embedded in the JSON
//! body rather than the HTTP status: an integer `200` on the current-weather
//! endpoint, but the string `"200"` on the forecast endpoint. Error payloads
//! reuse the same field, so callers must check it before trusting the rest
//! of the shape.

use serde_json::{Number, Value};

/// Decoded response from the current-weather endpoint.
#[derive(Debug, Clone)]
pub struct CurrentWeather {
    raw: Value,
}

impl CurrentWeather {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Whether the provider reported success (`cod` equal to integer 200).
    pub fn is_success(&self) -> bool {
        self.raw.get("cod").and_then(Value::as_i64) == Some(200)
    }

    /// The first weather description, if the payload carries one.
    pub fn description(&self) -> Option<&str> {
        self.raw.get("weather")?.get(0)?.get("description")?.as_str()
    }

    /// The temperature, kept as the provider's own JSON number so display
    /// formatting matches the payload exactly.
    pub fn temperature(&self) -> Option<&Number> {
        self.raw.get("main")?.get("temp")?.as_number()
    }

    pub fn as_raw(&self) -> &Value {
        &self.raw
    }

    /// Consume the wrapper, yielding the payload for verbatim persistence.
    pub fn into_raw(self) -> Value {
        self.raw
    }
}

/// Decoded response from the forecast endpoint.
#[derive(Debug, Clone)]
pub struct Forecast {
    raw: Value,
}

impl Forecast {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Whether the provider reported success (`cod` equal to string "200").
    /// The differing type versus the current-weather endpoint is an upstream
    /// quirk; it is preserved per endpoint, not generalized.
    pub fn is_success(&self) -> bool {
        self.raw.get("cod").and_then(Value::as_str) == Some("200")
    }

    /// Time-ordered forecast points, typically 3-hourly. Empty if the
    /// payload has no `list` array.
    pub fn points(&self) -> Vec<ForecastPoint<'_>> {
        self.raw
            .get("list")
            .and_then(Value::as_array)
            .map(|list| list.iter().map(ForecastPoint::from_value).collect())
            .unwrap_or_default()
    }
}

/// A single forecast point. Every field is optional; partially-shaped
/// payloads must never fail a whole response.
#[derive(Debug, Clone, Copy)]
pub struct ForecastPoint<'a> {
    pub timestamp: Option<&'a str>,
    pub description: Option<&'a str>,
    pub temperature: Option<&'a Number>,
}

impl<'a> ForecastPoint<'a> {
    fn from_value(value: &'a Value) -> Self {
        Self {
            timestamp: value.get("dt_txt").and_then(Value::as_str),
            description: value
                .get("weather")
                .and_then(|w| w.get(0))
                .and_then(|w| w.get("description"))
                .and_then(Value::as_str),
            temperature: value
                .get("main")
                .and_then(|m| m.get("temp"))
                .and_then(Value::as_number),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use serde_json::json;

    #[test]
    fn current_weather_success_requires_integer_cod() {
        let ok = CurrentWeather::new(json!({"cod": 200}));
        assert!(ok.is_success());

        // The weather endpoint reports errors with a string cod.
        let err = CurrentWeather::new(json!({"cod": "404", "message": "city not found"}));
        assert!(!err.is_success());

        let missing = CurrentWeather::new(json!({}));
        assert!(!missing.is_success());
    }

    #[test]
    fn current_weather_extracts_description_and_temperature() {
        let weather = CurrentWeather::new(json!({
            "cod": 200,
            "weather": [{"description": "clear sky"}],
            "main": {"temp": 18.5}
        }));

        assert_eq!(weather.description(), Some("clear sky"));
        assert_eq!(weather.temperature().map(ToString::to_string).as_deref(), Some("18.5"));
    }

    #[test]
    fn current_weather_tolerates_partial_payloads() {
        let weather = CurrentWeather::new(json!({"cod": 200, "weather": []}));
        assert!(weather.description().is_none());
        assert!(weather.temperature().is_none());
    }

    #[test]
    fn forecast_success_requires_string_cod() {
        assert!(Forecast::new(json!({"cod": "200"})).is_success());
        // Integer 200 is the other endpoint's shape and must not match here.
        assert!(!Forecast::new(json!({"cod": 200})).is_success());
        assert!(!Forecast::new(json!({"cod": "404"})).is_success());
    }

    #[test]
    fn forecast_points_read_list_entries() {
        let forecast = Forecast::new(json!({
            "cod": "200",
            "list": [
                {
                    "dt_txt": "2026-08-24 12:00:00",
                    "weather": [{"description": "light rain"}],
                    "main": {"temp": 14.2}
                },
                {"main": {}}
            ]
        }));

        let points = forecast.points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].timestamp, Some("2026-08-24 12:00:00"));
        assert_eq!(points[0].description, Some("light rain"));
        assert_eq!(points[0].temperature.map(ToString::to_string).as_deref(), Some("14.2"));
        assert!(points[1].timestamp.is_none());
        assert!(points[1].description.is_none());
        assert!(points[1].temperature.is_none());
    }

    #[test]
    fn forecast_without_list_has_no_points() {
        assert!(Forecast::new(json!({"cod": "200"})).points().is_empty());
    }
}
