pub mod current;
pub mod onecall;

use serde::{Deserialize, Deserializer, de};
use thiserror::Error;

use crate::domain::weather::Condition;

/// Failure of a single endpoint call. `Http` carries the server's error
/// body so it can surface verbatim to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {source}")]
    Network {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned {status}: {body}")]
    Http {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Epoch-second fields arrive as integers from the live API but as
/// numeric strings in older payloads. Accept both, reject anything
/// non-numeric.
pub(crate) fn epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(value) => Ok(value),
        Raw::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("epoch timestamp is not numeric: {text:?}"))),
    }
}

/// Wire shape of one entry in a `weather` array, shared by both
/// endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ConditionBlock {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

pub(crate) fn into_conditions(blocks: Vec<ConditionBlock>) -> Vec<Condition> {
    blocks
        .into_iter()
        .map(|block| Condition {
            id: block.id,
            label: block.main,
            description: block.description,
            icon: block.icon,
        })
        .collect()
}

/// Keep server error bodies short enough for a log line or status row.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = body
            .char_indices()
            .take_while(|(idx, _)| *idx <= MAX)
            .last()
            .map_or(0, |(idx, _)| idx);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
