use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::data::{ConditionBlock, FetchError, epoch_seconds, into_conditions, truncate_body};
use crate::domain::weather::{Coordinates, Measures, SunTimes, WeatherReport, Wind};

const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const ENDPOINT: &str = "weather";

/// Client for the current-weather endpoint, queried by city name.
#[derive(Debug, Clone)]
pub struct CurrentWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CurrentWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(WEATHER_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn fetch(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|source| FetchError::Network {
                endpoint: ENDPOINT,
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Network {
                endpoint: ENDPOINT,
                source,
            })?;

        if !status.is_success() {
            return Err(FetchError::Http {
                endpoint: ENDPOINT,
                status,
                body: truncate_body(&body),
            });
        }

        let payload: CurrentPayload =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                endpoint: ENDPOINT,
                source,
            })?;

        Ok(payload.into_report())
    }
}

#[derive(Debug, Deserialize)]
struct CurrentPayload {
    coord: CoordBlock,
    weather: Vec<ConditionBlock>,
    main: MainBlock,
    wind: WindBlock,
    sys: SysBlock,
    #[serde(deserialize_with = "epoch_seconds")]
    dt: i64,
}

#[derive(Debug, Deserialize)]
struct CoordBlock {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    #[serde(deserialize_with = "epoch_seconds")]
    sunrise: i64,
    #[serde(deserialize_with = "epoch_seconds")]
    sunset: i64,
}

impl CurrentPayload {
    fn into_report(self) -> WeatherReport {
        WeatherReport {
            coord: Coordinates {
                lat: self.coord.lat,
                lon: self.coord.lon,
            },
            conditions: into_conditions(self.weather),
            measures: Measures {
                temp_c: self.main.temp,
                feels_like_c: self.main.feels_like,
                temp_min_c: self.main.temp_min,
                temp_max_c: self.main.temp_max,
                pressure_hpa: self.main.pressure,
                humidity_pct: self.main.humidity,
            },
            wind: Wind {
                speed_mps: self.wind.speed,
                direction_deg: self.wind.deg,
            },
            sun: SunTimes {
                sunrise: self.sys.sunrise,
                sunset: self.sys.sunset,
            },
            observed_at: self.dt,
        }
    }
}
