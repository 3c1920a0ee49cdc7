//! Instant-query reply parsing.
//!
//! The backend answers `GET /api/v1/query` with
//! `{"status":"success","data":{"result":[{"value":[ts,"87.3"]}, …]}}`.
//! Only the first sample's string-encoded value matters here.

use serde::Deserialize;
use thiserror::Error;

/// Why one instant query produced no usable value.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Transport-level failure: connect error, timeout, HTTP error status.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Body was not valid reply JSON.
    #[error("malformed reply: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Backend answered with a non-success status marker.
    #[error("backend status {0}")]
    BadStatus(String),
    /// Result array was empty: the expression matched no series.
    #[error("empty result")]
    Empty,
    /// The sample's value field was not a number.
    #[error("unparseable sample value: {0}")]
    BadValue(String),
}

#[derive(Debug, Deserialize)]
struct Reply {
    status: String,
    #[serde(default)]
    data: Option<Data>,
}

#[derive(Debug, Deserialize)]
struct Data {
    #[serde(default)]
    result: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    /// `[unix_timestamp, "string-encoded number"]`
    value: (f64, String),
}

/// Parse an instant-query reply body down to its first sample value.
pub fn parse_reply(body: &str) -> Result<f64, QueryError> {
    let reply: Reply = serde_json::from_str(body)?;
    if reply.status != "success" {
        return Err(QueryError::BadStatus(reply.status));
    }
    let first = reply
        .data
        .and_then(|data| data.result.into_iter().next())
        .ok_or(QueryError::Empty)?;
    let (_timestamp, raw) = first.value;
    raw.parse::<f64>().map_err(|_| QueryError::BadValue(raw))
}
