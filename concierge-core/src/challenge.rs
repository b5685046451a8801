use crate::weather_code::WeatherKind;

/// Ordered list the date checksum indexes into. Order is part of the output contract.
pub const CHALLENGES: [&str; 5] = [
    "Talk to a local and learn one tip about the neighborhood; reward: a new favourite spot.",
    "Try a 10-minute photography sprint: 10 frames, one subject, different angles.",
    "Buy a snack you've never tried before and rate it out of 10.",
    "Find a small green patch or park and spend 15 minutes mindful breathing.",
    "Write a 6-line micro-poem about the sky today and share it with a friend.",
];

pub const STORM_SAFE_CHALLENGE: &str =
    "Storm-safe challenge: Build a 20-minute cozy station (tea, playlist, journal) and reflect on a past trip.";

/// Sum of the Unicode code points of `date`.
///
/// For the ASCII dates the provider uses this matches a UTF-16 code-unit sum.
pub fn date_checksum(date: &str) -> u64 {
    date.chars().map(|c| u64::from(u32::from(c))).sum()
}

/// Pick the day's mini-challenge. Same date, same challenge; storms override.
pub fn pick_challenge(weather_code: i32, date: &str) -> &'static str {
    if WeatherKind::from_code(weather_code) == WeatherKind::Storm {
        return STORM_SAFE_CHALLENGE;
    }

    let index = (date_checksum(date) % CHALLENGES.len() as u64) as usize;
    CHALLENGES[index]
}
