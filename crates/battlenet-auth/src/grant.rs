//! OAuth2 grant-type strategies
//!
//! Each strategy validates the parameters a caller supplies for its grant
//! and exposes the wire-level `grant_type` value sent to the token
//! endpoint. Strategies are selected through an explicit registry keyed by
//! the caller-facing grant name, matched case-insensitively.
//!
//! The registry carries one historical alias: the caller key `client_id`
//! resolves to the client-credentials strategy, so both it and
//! `client_credentials` spell the wire value `client_credentials`.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// One OAuth2 grant type: parameter validation plus the wire identifier.
pub trait GrantType: Send + Sync + std::fmt::Debug {
    /// Caller-facing strategy name for logging.
    fn name(&self) -> &'static str;

    /// The `grant_type` value sent to the token endpoint. May differ from
    /// the key the caller used to select the strategy.
    fn wire_grant_type(&self) -> &'static str;

    /// Parameters this grant requires in the token request.
    fn required_parameters(&self) -> &'static [&'static str] {
        &[]
    }

    /// Check that every required parameter is present.
    fn validate(&self, parameters: &BTreeMap<String, String>) -> Result<()> {
        for required in self.required_parameters() {
            if !parameters.contains_key(*required) {
                return Err(Error::MissingParameter(required));
            }
        }
        Ok(())
    }
}

/// Authorization-code grant: exchanges a callback `code` for a token.
#[derive(Debug)]
pub struct AuthorizationCode;

impl GrantType for AuthorizationCode {
    fn name(&self) -> &'static str {
        "authorization_code"
    }

    fn wire_grant_type(&self) -> &'static str {
        "authorization_code"
    }

    fn required_parameters(&self) -> &'static [&'static str] {
        &["code"]
    }
}

/// Client-credentials grant: server-to-server, no user parameters.
#[derive(Debug)]
pub struct ClientCredentials;

impl GrantType for ClientCredentials {
    fn name(&self) -> &'static str {
        "client_credentials"
    }

    fn wire_grant_type(&self) -> &'static str {
        "client_credentials"
    }
}

/// Resource-owner password grant.
#[derive(Debug)]
pub struct Password;

impl GrantType for Password {
    fn name(&self) -> &'static str {
        "password"
    }

    fn wire_grant_type(&self) -> &'static str {
        "password"
    }

    fn required_parameters(&self) -> &'static [&'static str] {
        &["username", "password"]
    }
}

/// Refresh-token grant.
#[derive(Debug)]
pub struct RefreshToken;

impl GrantType for RefreshToken {
    fn name(&self) -> &'static str {
        "refresh_token"
    }

    fn wire_grant_type(&self) -> &'static str {
        "refresh_token"
    }

    fn required_parameters(&self) -> &'static [&'static str] {
        &["refresh_token"]
    }
}

/// Resolve a caller-facing grant key to its strategy.
///
/// Keys match case-insensitively. Unknown keys fail with
/// [`Error::UnknownGrantType`] carrying the original spelling.
pub fn resolve(grant_key: &str) -> Result<&'static dyn GrantType> {
    match grant_key.to_ascii_lowercase().as_str() {
        "authorization_code" => Ok(&AuthorizationCode),
        // `client_id` is the legacy caller key for the same strategy
        "client_credentials" | "client_id" => Ok(&ClientCredentials),
        "password" => Ok(&Password),
        "refresh_token" => Ok(&RefreshToken),
        _ => Err(Error::UnknownGrantType(grant_key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn client_id_aliases_client_credentials() {
        let by_alias = resolve("client_id").unwrap();
        let by_name = resolve("client_credentials").unwrap();
        assert_eq!(by_alias.wire_grant_type(), "client_credentials");
        assert_eq!(by_name.wire_grant_type(), "client_credentials");
        assert_eq!(by_alias.name(), by_name.name());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let grant = resolve("Authorization_Code").unwrap();
        assert_eq!(grant.wire_grant_type(), "authorization_code");
    }

    #[test]
    fn unknown_grant_type_carries_key() {
        let err = resolve("implicit").unwrap_err();
        match err {
            Error::UnknownGrantType(key) => assert_eq!(key, "implicit"),
            other => panic!("expected UnknownGrantType, got {other:?}"),
        }
    }

    #[test]
    fn authorization_code_requires_code() {
        let grant = resolve("authorization_code").unwrap();
        let err = grant.validate(&params(&[])).unwrap_err();
        match err {
            Error::MissingParameter(name) => assert_eq!(name, "code"),
            other => panic!("expected MissingParameter, got {other:?}"),
        }
        grant.validate(&params(&[("code", "abc123")])).unwrap();
    }

    #[test]
    fn password_requires_username_and_password() {
        let grant = resolve("password").unwrap();
        assert!(grant.validate(&params(&[("username", "u")])).is_err());
        grant
            .validate(&params(&[("username", "u"), ("password", "p")]))
            .unwrap();
    }

    #[test]
    fn refresh_token_requires_refresh_token() {
        let grant = resolve("refresh_token").unwrap();
        assert!(grant.validate(&params(&[])).is_err());
        grant
            .validate(&params(&[("refresh_token", "rt_1")]))
            .unwrap();
    }

    #[test]
    fn client_credentials_requires_nothing() {
        let grant = resolve("client_credentials").unwrap();
        grant.validate(&params(&[])).unwrap();
    }
}
