use crate::{
    app::state::AppState,
    cli::Cli,
    config::Credentials,
    domain::weather::{
        Condition, Coordinates, DailyEntry, DayTemps, ExtendedForecast, HourlyEntry, Measures,
        SunTimes, WeatherReport, Wind,
    },
};

/// State wired to a closed local port, for tests that drive
/// `handle_event` directly and never want a live request to resolve.
pub(crate) fn unroutable_state() -> AppState {
    let cli = Cli {
        city: None,
        api_key: None,
        api_url: Some("http://127.0.0.1:9".to_string()),
        utc: true,
    };
    let credentials = Credentials {
        api_key: "test-key".to_string(),
    };
    AppState::new(&cli, &credentials)
}

pub(crate) fn fixture_report() -> WeatherReport {
    WeatherReport {
        coord: Coordinates {
            lat: 59.3293,
            lon: 18.0686,
        },
        conditions: vec![Condition {
            id: 803,
            label: "Clouds".to_string(),
            description: "broken clouds".to_string(),
            icon: "04d".to_string(),
        }],
        measures: Measures {
            temp_c: 7.2,
            feels_like_c: 5.8,
            temp_min_c: 5.0,
            temp_max_c: 9.1,
            pressure_hpa: 1008.0,
            humidity_pct: 72.0,
        },
        wind: Wind {
            speed_mps: 3.6,
            direction_deg: 220.0,
        },
        sun: SunTimes {
            sunrise: 1_616_129_539,
            sunset: 1_616_173_121,
        },
        observed_at: 1_616_151_200,
    }
}

pub(crate) fn fixture_extended() -> ExtendedForecast {
    let cloudy = Condition {
        id: 803,
        label: "Clouds".to_string(),
        description: "broken clouds".to_string(),
        icon: "04d".to_string(),
    };

    ExtendedForecast {
        hourly: (0..6)
            .map(|idx| HourlyEntry {
                at: 1_616_151_600 + idx * 3600,
                temp_c: 7.0 + idx as f64 * 0.5,
                conditions: vec![cloudy.clone()],
            })
            .collect(),
        daily: (0..3)
            .map(|idx| DailyEntry {
                at: 1_616_151_600 + idx * 86_400,
                temps: DayTemps {
                    day_c: 8.0 + idx as f64,
                    min_c: 1.2,
                    max_c: 9.4 + idx as f64,
                    night_c: 2.1,
                },
                conditions: vec![cloudy.clone()],
            })
            .collect(),
    }
}
