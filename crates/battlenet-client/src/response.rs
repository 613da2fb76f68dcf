//! Response envelope normalization
//!
//! Turns a raw transport exchange into the result callers see: the body
//! parsed as JSON when possible (otherwise returned untouched), with the
//! response headers, HTTP status, and final URL attached. A transport
//! failure still produces an envelope — its `http_code` carries the `~`
//! sentinel so callers can tell a dead connection from a real status.

use std::collections::BTreeMap;

use crate::transport::TransportResponse;

/// Marker prefixed onto `http_code` when the transport itself failed.
pub const TRANSPORT_FAILURE_SENTINEL: char = '~';

/// Parsed body plus the response metadata annotations.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub data: serde_json::Value,
    /// Response headers, with the status line under the `http_code` key.
    pub header: BTreeMap<String, String>,
    /// Numeric HTTP status as a string; `~`-prefixed on transport failure.
    pub http_code: String,
    /// URL the response actually came from (after redirects).
    pub last_url: String,
}

/// Result of one fetch.
#[derive(Debug, Clone)]
pub enum FetchResult {
    /// Body parsed as JSON, annotated with the response envelope.
    Json(Envelope),
    /// Body that was not JSON, returned verbatim without annotations.
    Raw(String),
}

impl FetchResult {
    /// The parsed body, when there is one.
    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            FetchResult::Json(envelope) => Some(&envelope.data),
            FetchResult::Raw(_) => None,
        }
    }
}

/// Normalize a completed HTTP exchange.
pub(crate) fn from_transport(response: &TransportResponse) -> FetchResult {
    let data = match serde_json::from_str(&response.body) {
        Ok(value) => value,
        Err(_) => return FetchResult::Raw(response.body.clone()),
    };

    let mut header = BTreeMap::new();
    header.insert("http_code".to_string(), response.status_line.clone());
    for (name, value) in &response.headers {
        header.insert(name.clone(), value.clone());
    }

    FetchResult::Json(Envelope {
        data,
        header,
        http_code: response.status.to_string(),
        last_url: response.effective_url.clone(),
    })
}

/// Normalize a transport-level failure: no status was obtained, so the
/// envelope carries the sentinel-prefixed zero code and a null body.
pub(crate) fn from_failure(url: &str) -> FetchResult {
    FetchResult::Json(Envelope {
        data: serde_json::Value::Null,
        header: BTreeMap::new(),
        http_code: format!("{TRANSPORT_FAILURE_SENTINEL}0"),
        last_url: url.to_string(),
    })
}
