use crate::{
    Config,
    error::ConciergeError,
    model::{DailySeries, Location},
    provider::open_meteo::OpenMeteoProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// Geocoding plus daily forecast: the two lookups a concierge query needs.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// First match for a free-text city name.
    async fn resolve_city(&self, name: &str) -> Result<Location, ConciergeError>;

    /// Daily series for `days` days starting today, in the location's timezone.
    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<DailySeries, ConciergeError>;
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let boxed: Box<dyn ForecastProvider> = Box::new(OpenMeteoProvider::from_config(config)?);
    Ok(boxed)
}

/// Join the non-empty name parts with `", "`.
pub fn build_location_name(name: Option<&str>, admin1: Option<&str>, country: Option<&str>) -> String {
    let parts: Vec<&str> = [name, admin1, country]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        "Unknown location".to_string()
    } else {
        parts.join(", ")
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
