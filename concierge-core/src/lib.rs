//! Core library for the `concierge` CLI.
//!
//! This crate defines:
//! - A pure recommendation engine that turns one forecast day into a day plan,
//!   outfit, playlist, photo tip and mini-challenge
//! - Safe access to the provider's parallel daily arrays
//! - The Open-Meteo geocoding/forecast provider and the query orchestration
//! - Configuration and the error taxonomy
//!
//! It is used by `concierge-cli`, but the engine has no I/O and can be called
//! from any other front end.

pub mod challenge;
pub mod concierge;
pub mod config;
pub mod daylight;
pub mod error;
pub mod model;
pub mod provider;
pub mod recommend;
pub mod series;
pub mod weather_code;

pub use concierge::plan_day;
pub use config::Config;
pub use error::ConciergeError;
pub use model::{DailySeries, ForecastDay, Location, PlanRequest, RecommendationBundle, WeatherReport};
pub use provider::{ForecastProvider, provider_from_config};
pub use recommend::build_recommendations;
pub use weather_code::WeatherKind;
