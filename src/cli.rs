use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skycast",
    version,
    about = "Weather snapshot for a selected city"
)]
pub struct Cli {
    /// City name (default: Stockholm)
    pub city: Option<String>,

    /// OpenWeatherMap API key (falls back to OPENWEATHER_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the API base URL (primarily for tests)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Render clock times in UTC instead of the local zone
    #[arg(long)]
    pub utc: bool,
}

impl Cli {
    #[must_use]
    pub fn default_city(&self) -> String {
        self.city.clone().unwrap_or_else(|| "Stockholm".to_string())
    }
}
