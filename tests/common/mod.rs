#![allow(dead_code)]

use skycast::{app::state::AppState, cli::Cli, config::Credentials};
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-key";

pub fn current_payload(lat: f64, lon: f64) -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": lon, "lat": lat},
        "weather": [
            {"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}
        ],
        "main": {
            "temp": 7.2, "feels_like": 5.8, "temp_min": 5.0, "temp_max": 9.1,
            "pressure": 1008, "humidity": 72
        },
        "wind": {"speed": 3.6, "deg": 220},
        "sys": {"sunrise": 1616129539, "sunset": 1616173121},
        "dt": 1616151200
    })
}

pub fn onecall_payload() -> serde_json::Value {
    serde_json::json!({
        "hourly": [
            {"dt": 1616151600, "temp": 7.5,
             "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}]},
            {"dt": 1616155200, "temp": 8.1,
             "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}]}
        ],
        "daily": [
            {"dt": 1616151600,
             "temp": {"day": 8.0, "min": 1.2, "max": 9.4, "night": 2.1},
             "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}]}
        ]
    })
}

pub fn error_payload(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({"cod": code, "message": message})
}

/// Coordinator wired to a mock server, default city Stockholm.
pub fn state_for(server: &MockServer) -> AppState {
    let cli = Cli {
        city: Some("Stockholm".to_string()),
        api_key: None,
        api_url: Some(server.uri()),
        utc: true,
    };
    let credentials = Credentials {
        api_key: TEST_KEY.to_string(),
    };
    AppState::new(&cli, &credentials)
}
