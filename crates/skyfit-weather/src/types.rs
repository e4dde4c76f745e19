use serde::{Deserialize, Serialize};
use skyfit_palette::Condition;

use crate::location::LocationError;

/// Current weather for one place, in the upstream provider's shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    /// Place name, e.g. "Seattle".
    pub name: String,
    pub sys: SysInfo,
    pub main: MainMetrics,
    /// Active conditions, most significant first. Usually one entry.
    pub weather: Vec<ConditionEntry>,
    pub wind: Wind,
}

impl WeatherData {
    /// The most significant reported condition, if any.
    pub fn primary_condition(&self) -> Option<Condition> {
        self.weather.first().map(|entry| entry.main)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SysInfo {
    /// ISO country code, e.g. "US".
    pub country: String,
}

/// Temperature and humidity block. Temperatures are in the unit the API was
/// asked for; this crate does not convert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainMetrics {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub main: Condition,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    /// Meters per second.
    pub speed: f64,
}

/// The API response envelope: weather plus the outfit suggestion derived
/// from it server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub weather: WeatherData,
    pub outfit: String,
}

/// Weather service errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Too many requests; window resets in {seconds}s")]
    RateLimited { seconds: u64 },
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "name": "Seattle",
            "sys": { "country": "US" },
            "main": {
                "temp": 18.2,
                "feels_like": 17.9,
                "humidity": 62,
                "temp_min": 16.0,
                "temp_max": 20.1
            },
            "weather": [{ "main": "Clouds", "description": "scattered clouds" }],
            "wind": { "speed": 4.1 }
        }"#
    }

    #[test]
    fn test_weather_data_deserializes() {
        let data: WeatherData = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(data.name, "Seattle");
        assert_eq!(data.sys.country, "US");
        assert_eq!(data.main.humidity, 62);
        assert_eq!(data.primary_condition(), Some(Condition::Clouds));
    }

    #[test]
    fn test_unrecognized_condition_becomes_unknown() {
        let json = sample_json().replace("Clouds", "Meteors");
        let data: WeatherData = serde_json::from_str(&json).unwrap();
        assert_eq!(data.primary_condition(), Some(Condition::Unknown));
    }

    #[test]
    fn test_primary_condition_empty_list() {
        let json = sample_json().replace(
            r#"[{ "main": "Clouds", "description": "scattered clouds" }]"#,
            "[]",
        );
        let data: WeatherData = serde_json::from_str(&json).unwrap();
        assert_eq!(data.primary_condition(), None);
    }

    #[test]
    fn test_report_round_trips() {
        let report = WeatherReport {
            weather: serde_json::from_str(sample_json()).unwrap(),
            outfit: "Light jacket and jeans".to_string(),
        };
        let encoded = serde_json::to_string(&report).unwrap();
        let decoded: WeatherReport = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.outfit, report.outfit);
        assert_eq!(decoded.weather.name, "Seattle");
    }
}
