use tokio::sync::mpsc;

use crate::{
    data::{current::CurrentWeatherClient, onecall::OneCallClient},
    domain::weather::{ExtendedForecast, WeatherReport},
};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    SelectCity(String),
    FetchSucceeded {
        generation: u64,
        report: WeatherReport,
        extended: Option<ExtendedForecast>,
    },
    FetchFailed {
        generation: u64,
        message: String,
    },
    Quit,
}

/// Run one fetch cycle off the coordinator task: current weather by city,
/// then the extended outlook for the coordinates that came back. An
/// extended-fetch failure degrades to `None` so the report still lands;
/// only a current-fetch failure fails the cycle.
pub fn start_fetch_cycle(
    tx: mpsc::Sender<AppEvent>,
    current: CurrentWeatherClient,
    onecall: OneCallClient,
    city: String,
    generation: u64,
) {
    tokio::spawn(async move {
        match current.fetch(&city).await {
            Ok(report) => {
                let extended = match onecall.fetch(report.coord.lat, report.coord.lon).await {
                    Ok(forecast) => Some(forecast),
                    Err(err) => {
                        tracing::warn!(%city, error = %err, "extended forecast unavailable, keeping previous outlook");
                        None
                    }
                };
                let _ = tx
                    .send(AppEvent::FetchSucceeded {
                        generation,
                        report,
                        extended,
                    })
                    .await;
            }
            Err(err) => {
                let _ = tx
                    .send(AppEvent::FetchFailed {
                        generation,
                        message: err.to_string(),
                    })
                    .await;
            }
        }
    });
}
