//! HTTP client for the skyfit weather API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::location::Position;
use crate::types::{WeatherError, WeatherReport};

const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("skyfit/", env!("CARGO_PKG_VERSION"));

/// Request body for lookup by coordinates.
#[derive(Debug, Serialize)]
struct CoordinateQuery<'a> {
    latitude: f64,
    longitude: f64,
    style: &'a str,
}

/// Request body for lookup by city name.
#[derive(Debug, Serialize)]
struct CityQuery<'a> {
    city: &'a str,
    style: &'a str,
}

/// Client for the weather + outfit API.
///
/// The API derives the outfit suggestion server-side from the weather and
/// the caller's style preference, so both lookups carry `style`.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Arc<Client>,
    base_url: Url,
    style: String,
}

impl WeatherClient {
    /// Create a client against `base_url` with the given outfit style
    /// preference.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::InvalidRequest`] when `style` is empty, or a
    /// network error if the underlying client cannot be built.
    pub fn new(base_url: Url, style: impl Into<String>) -> Result<Self, WeatherError> {
        let style = style.into();
        if style.trim().is_empty() {
            return Err(WeatherError::InvalidRequest(
                "outfit style must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url,
            style,
        })
    }

    /// Fetch weather and outfit for a resolved position.
    pub async fn fetch_by_position(
        &self,
        position: Position,
    ) -> Result<WeatherReport, WeatherError> {
        tracing::debug!(
            latitude = position.latitude,
            longitude = position.longitude,
            "Fetching weather by position"
        );
        self.post_report(
            "api/weather",
            &CoordinateQuery {
                latitude: position.latitude,
                longitude: position.longitude,
                style: &self.style,
            },
        )
        .await
    }

    /// Fetch weather and outfit for a manually entered city.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::InvalidRequest`] for an empty city before any
    /// network I/O happens.
    pub async fn fetch_by_city(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::InvalidRequest(
                "city must not be empty".to_string(),
            ));
        }

        tracing::debug!(city, "Fetching weather by city");
        self.post_report(
            "api/weatherManual",
            &CityQuery {
                city,
                style: &self.style,
            },
        )
        .await
    }

    async fn post_report<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<WeatherReport, WeatherError> {
        let url = self.base_url.join(path)?;
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Weather API request failed");
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let report: WeatherReport = response.json().await?;
        tracing::info!(
            place = %report.weather.name,
            condition = ?report.weather.primary_condition(),
            "Fetched weather report"
        );
        Ok(report)
    }
}
