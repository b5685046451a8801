use chrono::{DateTime, NaiveDateTime};

/// Returned whenever daylight cannot be computed.
pub const NOT_AVAILABLE: &str = "N/A";

const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse a provider timestamp as local wall-clock time.
///
/// Offsets are accepted but not converted: both endpoints are assumed to
/// share the provider's timezone.
fn parse_local(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// `"<H>h <M>m (from HH:MM to HH:MM)"`, or [`NOT_AVAILABLE`] if either side
/// fails to parse or sunset precedes sunrise.
pub fn compute_daylight(sunrise: &str, sunset: &str) -> String {
    let (Some(rise), Some(set)) = (parse_local(sunrise), parse_local(sunset)) else {
        return NOT_AVAILABLE.to_string();
    };

    let elapsed = set - rise;
    if elapsed < chrono::Duration::zero() {
        return NOT_AVAILABLE.to_string();
    }

    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes() % 60;

    format!(
        "{hours}h {minutes}m (from {} to {})",
        rise.format("%H:%M"),
        set.format("%H:%M")
    )
}
