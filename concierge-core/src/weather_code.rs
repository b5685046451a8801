/// Named category for a WMO weather code as reported by the forecast provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherKind {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Storm,
    /// A known-valid code outside the bands the engine cares about (e.g. 4..=44).
    Other,
    /// Missing code (sentinel `-1`) or any negative value.
    Unknown,
}

impl WeatherKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            i32::MIN..=-1 => WeatherKind::Unknown,
            0 => WeatherKind::Clear,
            1..=3 => WeatherKind::PartlyCloudy,
            45..=48 => WeatherKind::Fog,
            51..=67 => WeatherKind::Rain,
            71..=77 => WeatherKind::Snow,
            80.. => WeatherKind::Storm,
            _ => WeatherKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "clear",
            WeatherKind::PartlyCloudy => "partly cloudy",
            WeatherKind::Fog => "fog",
            WeatherKind::Rain => "rain",
            WeatherKind::Snow => "snow",
            WeatherKind::Storm => "storm/showers",
            WeatherKind::Other => "other",
            WeatherKind::Unknown => "unknown",
        }
    }

    /// Rain bands and storms both call for the waterproof kit.
    pub fn is_wet(&self) -> bool {
        matches!(self, WeatherKind::Rain | WeatherKind::Storm)
    }
}

impl std::fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<i32> for WeatherKind {
    fn from(code: i32) -> Self {
        WeatherKind::from_code(code)
    }
}
