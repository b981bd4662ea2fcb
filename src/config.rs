use anyhow::{Context, Result};

pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// API credential, resolved at startup. There is no embedded default:
/// the key comes from the command line or the environment (a `.env`
/// file is honored if present).
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
}

impl Credentials {
    pub fn resolve(cli_key: Option<&str>) -> Result<Self> {
        if let Some(key) = cli_key {
            return Ok(Self {
                api_key: key.to_string(),
            });
        }

        let _ = dotenvy::dotenv();
        let api_key = std::env::var(API_KEY_VAR)
            .with_context(|| format!("no API key: pass --api-key or set {API_KEY_VAR}"))?;
        Ok(Self { api_key })
    }
}
