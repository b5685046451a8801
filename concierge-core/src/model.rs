use serde::{Deserialize, Serialize};

/// One query issued by a caller: free-text city plus an ISO date (`YYYY-MM-DD`).
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub city: String,
    pub date: String,
}

/// First geocoding match for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// The provider's `daily` block: parallel arrays indexed by day.
///
/// Any array may be missing and any element may be `null`; lookups go through
/// the safe accessor in [`crate::series`] so gaps turn into sentinels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Option<Vec<String>>,
    #[serde(default)]
    pub weather_code: Option<Vec<Option<i32>>>,
    #[serde(default)]
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub rain_sum: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub precipitation_sum: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub sunrise: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub sunset: Option<Vec<Option<String>>>,
}

/// A single day pulled out of a [`DailySeries`].
///
/// Missing values are sentinels, not options: `NAN` for measurements, `-1`
/// for the weather code and `""` for timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: String,
    pub max_temp: f64,
    pub min_temp: f64,
    pub rain_sum: f64,
    pub precipitation_sum: f64,
    pub weather_code: i32,
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
    pub daylight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitAdvice {
    pub outfit: String,
    pub accessories: String,
    pub pack: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeExtras {
    pub photo_tip: String,
    pub mini_challenge: String,
    pub local_idea: String,
}

/// Everything the engine derives for one (location, date) query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBundle {
    pub vibe: String,
    pub day_plan: DayPlan,
    pub outfit: OutfitAdvice,
    pub playlist: String,
    pub creative: CreativeExtras,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Full answer to a [`PlanRequest`]: where, when, the raw day and the advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub coordinates: Coordinates,
    pub date: String,
    pub max_temp: f64,
    pub min_temp: f64,
    pub rain: f64,
    pub precipitation: f64,
    pub weather_code: i32,
    pub sunrise: String,
    pub sunset: String,
    pub recommendations: RecommendationBundle,
}

impl WeatherReport {
    pub fn new(location: &Location, day: ForecastDay, recommendations: RecommendationBundle) -> Self {
        Self {
            location: location.display_name.clone(),
            coordinates: Coordinates { lat: location.latitude, lng: location.longitude },
            date: day.date,
            max_temp: day.max_temp,
            min_temp: day.min_temp,
            rain: day.rain_sum,
            precipitation: day.precipitation_sum,
            weather_code: day.weather_code,
            sunrise: day.sunrise,
            sunset: day.sunset,
            recommendations,
        }
    }
}
