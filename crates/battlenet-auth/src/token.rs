//! Token state and token-endpoint request shaping
//!
//! `TokenState` is the per-client record of the cached access token and
//! how to present it on requests. `build_token_request` turns a grant key
//! plus caller parameters into the form body and headers for the token
//! endpoint, applying the configured client-auth scheme.

use std::collections::BTreeMap;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::error::{Error, Result};
use crate::grant;

/// How the cached access token is attached to resource requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessTokenType {
    /// Token injected into the request parameter bag.
    #[default]
    Uri,
    /// `Authorization: Bearer <token>` header.
    Bearer,
    /// `Authorization: OAuth <token>` header.
    OAuth,
    /// Per-request HMAC signature header.
    Mac,
}

impl FromStr for AccessTokenType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "uri" => Ok(AccessTokenType::Uri),
            "bearer" => Ok(AccessTokenType::Bearer),
            "oauth" => Ok(AccessTokenType::OAuth),
            "mac" => Ok(AccessTokenType::Mac),
            _ => Err(Error::InvalidAccessTokenType(s.to_string())),
        }
    }
}

/// How client credentials are presented to the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientAuthType {
    /// `client_id` and `client_secret` as body parameters.
    #[default]
    Uri,
    /// `client_id` as a body parameter, secret in a Basic header.
    Basic,
    /// Same wire shape as Uri; kept distinct for callers that configure it.
    Form,
}

impl FromStr for ClientAuthType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "uri" => Ok(ClientAuthType::Uri),
            "basic" => Ok(ClientAuthType::Basic),
            "form" => Ok(ClientAuthType::Form),
            _ => Err(Error::InvalidClientAuthType(s.to_string())),
        }
    }
}

/// Cached access token plus presentation settings.
///
/// Owned exclusively by one client instance. Mutated only through the
/// setters or the client's initial acquisition; there is no automatic
/// refresh.
#[derive(Debug, Clone)]
pub struct TokenState {
    access_token: Option<String>,
    token_type: AccessTokenType,
    secret: Option<String>,
    algorithm: Option<String>,
    param_name: String,
}

impl Default for TokenState {
    fn default() -> Self {
        Self {
            access_token: None,
            token_type: AccessTokenType::default(),
            secret: None,
            algorithm: None,
            param_name: "access_token".to_string(),
        }
    }
}

impl TokenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn token_type(&self) -> AccessTokenType {
        self.token_type
    }

    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    pub fn algorithm(&self) -> Option<&str> {
        self.algorithm.as_deref()
    }

    /// Parameter name used when the token travels in the URI.
    pub fn param_name(&self) -> &str {
        &self.param_name
    }

    /// Replace the cached token value (supports externally-obtained tokens).
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
    }

    /// Set the presentation type, with the signing secret and algorithm
    /// that MAC mode needs. Bearer/OAuth/Uri callers pass `None` for both.
    pub fn set_token_type(
        &mut self,
        token_type: AccessTokenType,
        secret: Option<String>,
        algorithm: Option<String>,
    ) {
        self.token_type = token_type;
        self.secret = secret;
        self.algorithm = algorithm;
    }

    /// Override the URI-mode parameter name (default `access_token`).
    pub fn set_param_name(&mut self, name: impl Into<String>) {
        self.param_name = name.into();
    }
}

/// A shaped token-endpoint request: form body parameters plus headers.
#[derive(Debug)]
pub struct TokenRequest {
    pub params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

/// Build the token-endpoint request for a grant.
///
/// Resolves the grant strategy, validates the caller parameters, sets the
/// wire `grant_type`, and applies the client-auth scheme: Uri and Form
/// put both credentials in the body; Basic puts only `client_id` in the
/// body and carries the secret in an `Authorization: Basic` header.
pub fn build_token_request(
    grant_key: &str,
    parameters: &BTreeMap<String, String>,
    client_id: &str,
    client_secret: &str,
    client_auth: ClientAuthType,
    redirect_uri: &str,
) -> Result<TokenRequest> {
    let mut params = parameters.clone();
    params.insert("redirect_uri".to_string(), redirect_uri.to_string());

    let grant = grant::resolve(grant_key)?;
    grant.validate(&params)?;
    params.insert(
        "grant_type".to_string(),
        grant.wire_grant_type().to_string(),
    );
    debug!(grant = grant.name(), "shaped token request");

    let mut headers = Vec::new();
    match client_auth {
        ClientAuthType::Uri | ClientAuthType::Form => {
            params.insert("client_id".to_string(), client_id.to_string());
            params.insert("client_secret".to_string(), client_secret.to_string());
        }
        ClientAuthType::Basic => {
            params.insert("client_id".to_string(), client_id.to_string());
            let credentials = STANDARD.encode(format!("{client_id}:{client_secret}"));
            headers.push(("Authorization".to_string(), format!("Basic {credentials}")));
        }
    }

    Ok(TokenRequest {
        params: params.into_iter().collect(),
        headers,
    })
}
