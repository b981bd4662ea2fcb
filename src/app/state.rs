use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, start_fetch_cycle},
    cli::Cli,
    config::Credentials,
    data::{current::CurrentWeatherClient, onecall::OneCallClient},
    domain::weather::{ExtendedForecast, WeatherReport},
};

/// Result of the most recent committed fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready(WeatherReport),
    Failed(String),
}

impl FetchState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    #[must_use]
    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            FetchState::Ready(report) => Some(report),
            _ => None,
        }
    }
}

/// Owns the selected city, the latest fetch outcome, and the extended
/// outlook. All mutation happens inside [`AppState::handle_event`] on the
/// coordinator task; everything else gets read-only accessors.
///
/// Each cycle carries the generation current when it started. Selecting
/// a city bumps the generation, so a cycle that completes after a newer
/// selection commits nothing, regardless of completion order.
#[derive(Debug)]
pub struct AppState {
    running: bool,
    city: String,
    state: FetchState,
    extended: ExtendedForecast,
    generation: u64,
    current_client: CurrentWeatherClient,
    onecall_client: OneCallClient,
}

impl AppState {
    pub fn new(cli: &Cli, credentials: &Credentials) -> Self {
        let (current_client, onecall_client) = match cli.api_url.as_deref() {
            Some(base) => (
                CurrentWeatherClient::with_base_url(format!("{base}/weather"), &credentials.api_key),
                OneCallClient::with_base_url(format!("{base}/onecall"), &credentials.api_key),
            ),
            None => (
                CurrentWeatherClient::new(&credentials.api_key),
                OneCallClient::new(&credentials.api_key),
            ),
        };

        Self {
            running: true,
            city: cli.default_city(),
            state: FetchState::Loading,
            extended: ExtendedForecast::default(),
            generation: 0,
            current_client,
            onecall_client,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn fetch_state(&self) -> &FetchState {
        &self.state
    }

    #[must_use]
    pub fn extended(&self) -> &ExtendedForecast {
        &self.extended
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) {
        match event {
            AppEvent::Bootstrap => {
                let city = self.city.clone();
                self.select_city(city, tx);
            }
            AppEvent::SelectCity(city) => {
                self.select_city(city, tx);
            }
            AppEvent::FetchSucceeded {
                generation,
                report,
                extended,
            } => {
                if self.is_stale(generation) {
                    return;
                }
                tracing::info!(
                    city = %self.city,
                    temp_c = report.measures.temp_c,
                    "weather report committed"
                );
                if let Some(extended) = extended {
                    self.extended = extended;
                }
                self.state = FetchState::Ready(report);
            }
            AppEvent::FetchFailed {
                generation,
                message,
            } => {
                if self.is_stale(generation) {
                    return;
                }
                tracing::error!(city = %self.city, error = %message, "weather fetch failed");
                self.state = FetchState::Failed(message);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    fn select_city(&mut self, city: String, tx: &mpsc::Sender<AppEvent>) {
        self.city = city;
        self.state = FetchState::Loading;
        self.generation += 1;
        tracing::debug!(city = %self.city, generation = self.generation, "starting fetch cycle");
        start_fetch_cycle(
            tx.clone(),
            self.current_client.clone(),
            self.onecall_client.clone(),
            self.city.clone(),
            self.generation,
        );
    }

    fn is_stale(&self, generation: u64) -> bool {
        if generation == self.generation {
            return false;
        }
        tracing::debug!(
            generation,
            current = self.generation,
            "discarding result from a superseded fetch cycle"
        );
        true
    }
}
