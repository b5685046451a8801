use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use concierge_core::{Config, ConciergeError, PlanRequest, plan_day, provider_from_config};
use inquire::Text;
use std::process::ExitCode;
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "concierge", version, about = "Weather concierge: a day plan from the forecast")]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the forecast and print recommendations for one day.
    Plan {
        /// City name; prompted for if absent.
        city: Option<String>,

        /// Date as YYYY-MM-DD within the forecast window; prompted for if absent.
        #[arg(long)]
        date: Option<String>,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file location and the effective settings.
    Config,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Plan { city, date, json } => {
                let config = Config::load()?;
                let city = match city {
                    Some(c) => c,
                    None => prompt_city()?,
                };
                let date = match date {
                    Some(d) => d,
                    None => prompt_date(config.forecast_days)?,
                };

                let request = PlanRequest { city: city.trim().to_string(), date: date.trim().to_string() };
                run_plan(&config, &request, json).await
            }
            Command::Config => {
                let path = Config::config_file_path()?;
                let config = Config::load()?;
                println!("Config file: {}", path.display());
                print!("{}", toml::to_string_pretty(&config).context("Failed to render config")?);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

async fn run_plan(config: &Config, request: &PlanRequest, json: bool) -> anyhow::Result<ExitCode> {
    let provider = provider_from_config(config)?;
    debug!(?provider, city = %request.city, date = %request.date, "planning day");

    match plan_day(provider.as_ref(), request, config.forecast_days).await {
        Ok(report) if json => {
            println!("{}", serde_json::to_string_pretty(&report).context("Failed to encode report")?);
        }
        Ok(report) => print!("{}", render::report(&report)),
        Err(err) => {
            eprintln!("\n{}", user_message(&err));
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Single terminal message for a failed query.
fn user_message(err: &ConciergeError) -> String {
    match err {
        ConciergeError::LocationNotFound { .. } => format!("❌ {err}"),
        ConciergeError::DateOutOfRange { .. } | ConciergeError::ForecastUnavailable => {
            format!("⚠️ {err}")
        }
        _ => format!("🚨 Error calling API: {}", error_chain(err)),
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

fn prompt_city() -> anyhow::Result<String> {
    Text::new("📍 City name:")
        .with_validator(|input: &str| {
            if input.trim().is_empty() {
                Ok(inquire::validator::Validation::Invalid("City name cannot be empty".into()))
            } else {
                Ok(inquire::validator::Validation::Valid)
            }
        })
        .prompt()
        .context("Failed to read city name")
}

fn prompt_date(forecast_days: u8) -> anyhow::Result<String> {
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let help = format!("YYYY-MM-DD, within the next {forecast_days} days");

    Text::new("📅 Date:")
        .with_default(&today)
        .with_help_message(&help)
        .prompt()
        .context("Failed to read date")
}
