pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod report;

#[cfg(test)]
pub(crate) mod test_support;

use std::io;

use anyhow::{Result, bail};
use chrono::{Local, Utc};
use tokio::sync::mpsc;

use app::{
    events::AppEvent,
    state::{AppState, FetchState},
};
use cli::Cli;
use config::Credentials;

/// One-shot entry point: run a fetch cycle for the selected city, print
/// the snapshot, exit. A failed current-weather fetch becomes a nonzero
/// exit with the server's message.
pub async fn run(cli: Cli) -> Result<()> {
    let credentials = Credentials::resolve(cli.api_key.as_deref())?;
    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);
    let mut app = AppState::new(&cli, &credentials);

    tx.send(AppEvent::Bootstrap).await?;

    while app.is_running() {
        let Some(event) = rx.recv().await else {
            break;
        };
        app.handle_event(event, &tx).await;
        if !app.fetch_state().is_loading() {
            break;
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match app.fetch_state() {
        FetchState::Ready(report) => {
            if cli.utc {
                report::write_report(&mut out, app.city(), report, app.extended(), &Utc)?;
            } else {
                report::write_report(&mut out, app.city(), report, app.extended(), &Local)?;
            }
            Ok(())
        }
        FetchState::Failed(message) => {
            bail!("weather lookup for {} failed: {message}", app.city())
        }
        FetchState::Loading => bail!("event channel closed before the fetch completed"),
    }
}
