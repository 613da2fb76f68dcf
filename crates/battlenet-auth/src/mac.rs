//! MAC access-token request signing
//!
//! Builds the `Authorization: MAC ...` header value for token type
//! [`AccessTokenType::Mac`](crate::AccessTokenType::Mac). The canonical
//! string is
//!
//! ```text
//! timestamp\nnonce\nMETHOD\npath[?query]\nhost\nport\n\n
//! ```
//!
//! keyed-hashed with the token secret and configured algorithm, then
//! base64-encoded. The timestamp is wall-clock seconds and the nonce is a
//! fresh unique value per call, so signatures are never reused.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use url::Url;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::token::TokenState;

/// Build the MAC `Authorization` header value (without the `MAC ` prefix).
///
/// `url` is the fully built request URL; its path, host, and port feed the
/// canonical string. For GET requests the caller's parameter bag is
/// re-serialized (form-encoded) onto the canonical path, mirroring how the
/// request line will look on the wire.
///
/// Requires an access token, signing secret, and algorithm on the token
/// state; the algorithm must be one of `sha256`, `sha384`, `sha512`.
pub fn mac_authorization(
    state: &TokenState,
    url: &str,
    method: &str,
    parameters: &BTreeMap<String, String>,
) -> Result<String> {
    let token = state
        .access_token()
        .ok_or(Error::MissingParameter("access_token"))?;
    let secret = state
        .secret()
        .ok_or(Error::MissingParameter("access_token_secret"))?;
    let algorithm = state
        .algorithm()
        .ok_or(Error::MissingParameter("access_token_algorithm"))?;

    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| Error::InvalidUrl(format!("{url}: no host")))?;
    let port = parsed
        .port_or_known_default()
        .unwrap_or(if parsed.scheme() == "https" { 443 } else { 80 });

    let mut path = parsed.path().to_string();
    if method == "GET" {
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(parameters)
            .finish();
        path.push('?');
        path.push_str(&query);
    }

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let nonce = Uuid::new_v4().simple().to_string();

    let canonical =
        format!("{timestamp}\n{nonce}\n{method}\n{path}\n{host}\n{port}\n\n");
    let digest = keyed_digest(algorithm, secret.as_bytes(), canonical.as_bytes())?;
    let signature = STANDARD.encode(digest);

    Ok(format!(
        "id=\"{token}\", ts=\"{timestamp}\", nonce=\"{nonce}\", mac=\"{signature}\""
    ))
}

fn keyed_digest(algorithm: &str, secret: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    // HMAC accepts keys of any length, so new_from_slice cannot fail
    match algorithm.to_ascii_lowercase().as_str() {
        "sha256" => {
            let mut mac =
                Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
            mac.update(message);
            Ok(mac.finalize().into_bytes().to_vec())
        }
        "sha384" => {
            let mut mac =
                Hmac::<Sha384>::new_from_slice(secret).expect("HMAC can take key of any size");
            mac.update(message);
            Ok(mac.finalize().into_bytes().to_vec())
        }
        "sha512" => {
            let mut mac =
                Hmac::<Sha512>::new_from_slice(secret).expect("HMAC can take key of any size");
            mac.update(message);
            Ok(mac.finalize().into_bytes().to_vec())
        }
        _ => Err(Error::UnsupportedAlgorithm(algorithm.to_string())),
    }
}
