//! One query end to end: geocode, fetch, select the day, derive advice.

use tracing::{debug, info};

use crate::{
    error::ConciergeError,
    model::{PlanRequest, WeatherReport},
    provider::ForecastProvider,
    recommend::build_recommendations,
};

/// Run a single query against `provider`.
///
/// Each stage is tried once; the first failure ends the query.
pub async fn plan_day(
    provider: &dyn ForecastProvider,
    request: &PlanRequest,
    forecast_days: u8,
) -> Result<WeatherReport, ConciergeError> {
    let location = provider.resolve_city(&request.city).await?;
    info!(location = %location.display_name, "location resolved");

    let series = provider
        .daily_forecast(location.latitude, location.longitude, forecast_days)
        .await?;

    let Some(day) = series.find_day(&request.date) else {
        let (first, last) = series.date_range().unwrap_or(("?", "?"));
        return Err(ConciergeError::DateOutOfRange {
            date: request.date.clone(),
            first: first.to_string(),
            last: last.to_string(),
        });
    };
    debug!(?day, "selected forecast day");

    let recommendations = build_recommendations(&day, &location.display_name, &request.date);
    Ok(WeatherReport::new(&location, day, recommendations))
}
