use thiserror::Error;

/// A weather report carried an empty `weather` array. The API contract
/// promises at least one condition entry per report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("weather report carried no condition entries")]
pub struct MissingConditionData;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One weather condition descriptor: numeric code, short category label
/// ("Clear", "Clouds", ...), free-text description, and the provider's
/// icon key.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub id: i64,
    pub label: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measures {
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub pressure_hpa: f64,
    pub humidity_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub speed_mps: f64,
    pub direction_deg: f64,
}

/// Sunrise and sunset as integer epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: i64,
    pub sunset: i64,
}

/// Current conditions for one city, replaced wholesale on every
/// successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub coord: Coordinates,
    pub conditions: Vec<Condition>,
    pub measures: Measures,
    pub wind: Wind,
    pub sun: SunTimes,
    pub observed_at: i64,
}

impl WeatherReport {
    /// The leading condition entry, used for the headline description.
    pub fn primary_condition(&self) -> Result<&Condition, MissingConditionData> {
        self.conditions.first().ok_or(MissingConditionData)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub at: i64,
    pub temp_c: f64,
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTemps {
    pub day_c: f64,
    pub min_c: f64,
    pub max_c: f64,
    pub night_c: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub at: i64,
    pub temps: DayTemps,
    pub conditions: Vec<Condition>,
}

/// Hourly and daily outlook. Starts empty and keeps its previous value
/// whenever a refresh fails to produce a new one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtendedForecast {
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyEntry>,
}

impl ExtendedForecast {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hourly.is_empty() && self.daily.is_empty()
    }
}

pub fn round_temp(value: f64) -> i64 {
    value.round() as i64
}
