//! Text rendering of a [`WeatherReport`] for the terminal.

use std::fmt::Write;

use concierge_core::{WeatherKind, WeatherReport};

const RULE: &str = "══════════════════════════════════════════════════════════";

/// Temperature with at most one decimal, e.g. `27°C` or `27.4°C`.
pub fn format_temp(t: f64) -> String {
    if t.is_nan() { "N/A".to_string() } else { format!("{}°C", format_number(t)) }
}

/// Number with at most one decimal and no trailing `.0`.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "N/A".to_string();
    }
    let rounded = format!("{v:.1}");
    let trimmed = rounded.strip_suffix(".0").unwrap_or(&rounded);
    // "-0" reads oddly for values that round to zero.
    if trimmed == "-0" { "0".to_string() } else { trimmed.to_string() }
}

pub fn report(r: &WeatherReport) -> String {
    let b = &r.recommendations;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n📌 Location: {}", r.location);
    let _ = writeln!(
        out,
        "📍 Coordinates: Latitude {}, Longitude {}",
        r.coordinates.lat, r.coordinates.lng
    );

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "📊 Forecast for {} — {}", r.date, r.location);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "🌡️  Max: {}   Min: {}", format_temp(r.max_temp), format_temp(r.min_temp));
    let _ = writeln!(
        out,
        "🌧️  Rain: {} mm   Precipitation: {} mm",
        format_number(r.rain),
        format_number(r.precipitation)
    );
    let _ = writeln!(
        out,
        "🔢 Weather Code: {} ({})",
        r.weather_code,
        WeatherKind::from_code(r.weather_code)
    );
    let _ = writeln!(out, "🌅 Sunrise: {}   🌇 Sunset: {}", r.sunrise, r.sunset);

    let _ = writeln!(out, "\n────────  Curated Day Plan & Suggestions  ────────");
    let _ = writeln!(out, "{}\n", b.vibe);
    let _ = writeln!(out, "Morning: {}", b.day_plan.morning);
    let _ = writeln!(out, "Afternoon: {}", b.day_plan.afternoon);
    let _ = writeln!(out, "Evening: {}\n", b.day_plan.evening);
    let _ = writeln!(out, "{}", b.day_plan.daylight);

    let _ = writeln!(out, "\n────────  Outfit, Pack & Playlist  ────────");
    let _ = writeln!(out, "{}", b.outfit.outfit);
    let _ = writeln!(out, "{}\n", b.outfit.accessories);
    let _ = writeln!(out, "{}\n", b.outfit.pack);
    let _ = writeln!(out, "Playlist vibe: {}", b.playlist);

    let _ = writeln!(out, "\n────────  Photo Spots & Mini-Challenge  ────────");
    let _ = writeln!(out, "{}\n", b.creative.photo_tip);
    let _ = writeln!(out, "Mini-challenge: {}\n", b.creative.mini_challenge);
    let _ = writeln!(out, "{}", b.creative.local_idea);

    let _ = writeln!(out, "\n════════ Have a brilliant day! ✨ ════════");
    out
}
