//! Day lookup and bounds-checked field access over a [`DailySeries`].

use crate::model::{DailySeries, ForecastDay};

/// Placeholder returned when a field is missing, `null` or out of range.
pub trait Sentinel: Sized {
    fn sentinel() -> Self;
}

impl Sentinel for f64 {
    fn sentinel() -> Self {
        f64::NAN
    }
}

impl Sentinel for i32 {
    fn sentinel() -> Self {
        -1
    }
}

impl Sentinel for String {
    fn sentinel() -> Self {
        String::new()
    }
}

/// Read `values[index]`, falling back to the type's sentinel.
pub fn get<T: Sentinel + Clone>(values: Option<&[Option<T>]>, index: usize) -> T {
    values
        .and_then(|v| v.get(index))
        .and_then(|v| v.clone())
        .unwrap_or_else(T::sentinel)
}

/// Index of `target` in `dates`, compared case-insensitively but otherwise literally.
pub fn find_day_index<S: AsRef<str>>(dates: Option<&[S]>, target: &str) -> Option<usize> {
    let dates = dates?;
    if target.is_empty() {
        return None;
    }

    dates.iter().position(|d| eq_ignore_case(d.as_ref(), target))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.time.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First and last dates of the series, if any.
    pub fn date_range(&self) -> Option<(&str, &str)> {
        let time = self.time.as_ref()?;
        Some((time.first()?.as_str(), time.last()?.as_str()))
    }

    /// Assemble the day at `index`; every missing field becomes its sentinel.
    pub fn day(&self, index: usize) -> ForecastDay {
        let date = self
            .time
            .as_ref()
            .and_then(|t| t.get(index))
            .cloned()
            .unwrap_or_default();

        ForecastDay {
            date,
            max_temp: get(self.temperature_2m_max.as_deref(), index),
            min_temp: get(self.temperature_2m_min.as_deref(), index),
            rain_sum: get(self.rain_sum.as_deref(), index),
            precipitation_sum: get(self.precipitation_sum.as_deref(), index),
            weather_code: get(self.weather_code.as_deref(), index),
            sunrise: get(self.sunrise.as_deref(), index),
            sunset: get(self.sunset.as_deref(), index),
        }
    }

    pub fn find_day(&self, date: &str) -> Option<ForecastDay> {
        find_day_index(self.time.as_deref(), date).map(|i| self.day(i))
    }
}
