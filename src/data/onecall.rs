use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::data::{ConditionBlock, FetchError, epoch_seconds, into_conditions, truncate_body};
use crate::domain::weather::{DailyEntry, DayTemps, ExtendedForecast, HourlyEntry};

const ONECALL_URL: &str = "https://api.openweathermap.org/data/2.5/onecall";
const ENDPOINT: &str = "onecall";

/// Client for the one-call endpoint, queried by coordinates. Supplies
/// the hourly and daily outlook that the current-weather endpoint lacks.
#[derive(Debug, Clone)]
pub struct OneCallClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OneCallClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(ONECALL_URL, api_key)
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

    pub async fn fetch(&self, lat: f64, lon: f64) -> Result<ExtendedForecast, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
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

        let payload: OneCallPayload =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                endpoint: ENDPOINT,
                source,
            })?;

        Ok(payload.into_forecast())
    }
}

#[derive(Debug, Deserialize)]
struct OneCallPayload {
    hourly: Vec<HourlyBlock>,
    daily: Vec<DailyBlock>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    #[serde(deserialize_with = "epoch_seconds")]
    dt: i64,
    temp: f64,
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    #[serde(deserialize_with = "epoch_seconds")]
    dt: i64,
    temp: TempBlock,
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct TempBlock {
    day: f64,
    min: f64,
    max: f64,
    night: f64,
}

impl OneCallPayload {
    fn into_forecast(self) -> ExtendedForecast {
        ExtendedForecast {
            hourly: self
                .hourly
                .into_iter()
                .map(|block| HourlyEntry {
                    at: block.dt,
                    temp_c: block.temp,
                    conditions: into_conditions(block.weather),
                })
                .collect(),
            daily: self
                .daily
                .into_iter()
                .map(|block| DailyEntry {
                    at: block.dt,
                    temps: DayTemps {
                        day_c: block.temp.day,
                        min_c: block.temp.min,
                        max_c: block.temp.max,
                        night_c: block.temp.night,
                    },
                    conditions: into_conditions(block.weather),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_hourly_and_daily_blocks() {
        let body = r#"{
            "hourly": [
                {"dt": 1616151600, "temp": 7.5,
                 "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}]}
            ],
            "daily": [
                {"dt": "1616151600",
                 "temp": {"day": 8.0, "min": 1.2, "max": 9.4, "night": 2.1},
                 "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}]}
            ]
        }"#;

        let forecast: ExtendedForecast = serde_json::from_str::<OneCallPayload>(body)
            .unwrap()
            .into_forecast();
        assert_eq!(forecast.hourly.len(), 1);
        assert_eq!(forecast.hourly[0].temp_c, 7.5);
        assert_eq!(forecast.daily[0].at, 1_616_151_600);
        assert_eq!(forecast.daily[0].temps.night_c, 2.1);
        assert_eq!(forecast.daily[0].conditions[0].label, "Rain");
    }
}
