use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    Config,
    error::ConciergeError,
    model::{DailySeries, Location},
    provider::{build_location_name, truncate_body},
};

use super::ForecastProvider;

const GEOCODING: &str = "Open-Meteo geocoding";
const FORECAST: &str = "Open-Meteo forecast";

/// Fields requested for every forecast day.
pub const DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,rain_sum,precipitation_sum,sunrise,sunset";

/// Key-less provider backed by the Open-Meteo geocoding and forecast APIs.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    search_url: String,
    forecast_url: String,
    language: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            search_url: config.geocoding_search_url(),
            forecast_url: config.forecast_url(),
            language: config.language.clone(),
            http,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ConciergeError> {
        debug!(%url, "requesting {service}");

        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| ConciergeError::Transport { service, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| ConciergeError::Transport { service, source })?;

        if !status.is_success() {
            warn!(%status, "{service} request failed");
            return Err(ConciergeError::HttpStatus {
                service,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| ConciergeError::Decode { service, source })
    }
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    admin1: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Option<Vec<GeoResult>>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    daily: Option<DailySeries>,
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn resolve_city(&self, name: &str) -> Result<Location, ConciergeError> {
        let parsed: GeoResponse = self
            .get_json(
                GEOCODING,
                &self.search_url,
                &[
                    ("name", name.to_string()),
                    ("count", "1".to_string()),
                    ("language", self.language.clone()),
                    ("format", "json".to_string()),
                ],
            )
            .await?;

        let first = parsed
            .results
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| ConciergeError::LocationNotFound { city: name.to_string() })?;

        let display_name = build_location_name(
            first.name.as_deref(),
            first.admin1.as_deref(),
            first.country.as_deref(),
        );
        debug!(
            %display_name,
            latitude = first.latitude,
            longitude = first.longitude,
            "resolved city"
        );

        Ok(Location { latitude: first.latitude, longitude: first.longitude, display_name })
    }

    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<DailySeries, ConciergeError> {
        let parsed: ForecastResponse = self
            .get_json(
                FORECAST,
                &self.forecast_url,
                &[
                    ("latitude", latitude.to_string()),
                    ("longitude", longitude.to_string()),
                    ("daily", DAILY_FIELDS.to_string()),
                    ("forecast_days", days.to_string()),
                    ("timezone", "auto".to_string()),
                ],
            )
            .await?;

        let daily = parsed
            .daily
            .filter(|d| d.time.is_some())
            .ok_or(ConciergeError::ForecastUnavailable)?;

        debug!(timezone = ?parsed.timezone, days = daily.len(), "received daily series");
        Ok(daily)
    }
}
