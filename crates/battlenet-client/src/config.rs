//! Client configuration
//!
//! Construction parameters for the API client, loadable from a TOML file
//! with an environment overlay. The client secret is never stored in the
//! TOML: it is resolved from the `BNET_CLIENT_SECRET` env var or a
//! `client_secret_file` path, in that order.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use common::SecretString;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::region::Region;

/// Env var holding the client secret (takes precedence over the file).
pub const CLIENT_SECRET_ENV: &str = "BNET_CLIENT_SECRET";

/// Construction parameters for [`ApiClient`](crate::client::ApiClient).
#[derive(Debug)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: SecretString,
    pub region: Region,
    pub locale: String,
    /// Always https; an `http://` value is upgraded at construction.
    pub redirect_uri: String,
}

/// On-disk shape of the config file.
#[derive(Debug, Deserialize)]
struct RawConfig {
    client_id: String,
    region: String,
    locale: String,
    redirect_uri: String,
    /// Path to a file containing the client secret (alternative to the
    /// `BNET_CLIENT_SECRET` env var)
    #[serde(default)]
    client_secret_file: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: SecretString,
        region: Region,
        locale: impl Into<String>,
        redirect_uri: &str,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret,
            region,
            locale: locale.into(),
            redirect_uri: force_https(redirect_uri),
        }
    }

    /// Load configuration from a TOML file, then overlay environment
    /// variables.
    ///
    /// Secret resolution order:
    /// 1. `BNET_CLIENT_SECRET` env var
    /// 2. `client_secret_file` path from config
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let raw: RawConfig = toml::from_str(&contents)?;

        if raw.client_id.is_empty() {
            return Err(Error::Config("client_id must not be empty".into()));
        }

        let region = Region::from_str(&raw.region)?;

        let client_secret = if let Ok(secret) = std::env::var(CLIENT_SECRET_ENV) {
            SecretString::new(secret)
        } else if let Some(secret_file) = &raw.client_secret_file {
            let secret = std::fs::read_to_string(secret_file).map_err(|e| {
                Error::Config(format!(
                    "failed to read client_secret_file {}: {e}",
                    secret_file.display()
                ))
            })?;
            SecretString::new(secret.trim().to_owned())
        } else {
            return Err(Error::Config(format!(
                "no client secret: set {CLIENT_SECRET_ENV} or client_secret_file"
            )));
        };

        Ok(Self::new(
            raw.client_id,
            client_secret,
            region,
            raw.locale,
            &raw.redirect_uri,
        ))
    }
}

/// Upgrade a plain-http redirect URI; https values pass through.
fn force_https(uri: &str) -> String {
    match uri.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => uri.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn redirect_uri_is_forced_to_https() {
        let config = ClientConfig::new(
            "id",
            SecretString::new("secret"),
            Region::Us,
            "en_US",
            "http://example.org/callback",
        );
        assert_eq!(config.redirect_uri, "https://example.org/callback");
    }

    #[test]
    fn https_redirect_uri_is_untouched() {
        let config = ClientConfig::new(
            "id",
            SecretString::new("secret"),
            Region::Us,
            "en_US",
            "https://example.org/callback",
        );
        assert_eq!(config.redirect_uri, "https://example.org/callback");
    }

    #[test]
    fn load_resolves_secret_from_file() {
        // env var takes precedence; skip when the environment provides one
        if std::env::var(CLIENT_SECRET_ENV).is_ok() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();

        let secret_path = dir.path().join("secret");
        let mut secret_file = std::fs::File::create(&secret_path).unwrap();
        writeln!(secret_file, "file-secret").unwrap();

        let config_path = dir.path().join("client.toml");
        std::fs::write(
            &config_path,
            format!(
                "client_id = \"my-id\"\nregion = \"eu\"\nlocale = \"en_GB\"\n\
                 redirect_uri = \"http://example.org/cb\"\n\
                 client_secret_file = \"{}\"\n",
                secret_path.display()
            ),
        )
        .unwrap();

        let config = ClientConfig::load(&config_path).unwrap();
        assert_eq!(config.client_id, "my-id");
        assert_eq!(config.region, Region::Eu);
        assert_eq!(config.locale, "en_GB");
        assert_eq!(config.redirect_uri, "https://example.org/cb");
        assert_eq!(config.client_secret.expose(), "file-secret");
    }

    #[test]
    fn load_rejects_unknown_region() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("client.toml");
        std::fs::write(
            &config_path,
            "client_id = \"my-id\"\nregion = \"XX\"\nlocale = \"en_US\"\n\
             redirect_uri = \"https://example.org/cb\"\n",
        )
        .unwrap();

        let err = ClientConfig::load(&config_path).unwrap_err();
        assert!(matches!(err, crate::error::Error::UnknownRegion(code) if code == "XX"));
    }

    #[test]
    fn load_without_any_secret_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("client.toml");
        std::fs::write(
            &config_path,
            "client_id = \"my-id\"\nregion = \"us\"\nlocale = \"en_US\"\n\
             redirect_uri = \"https://example.org/cb\"\n",
        )
        .unwrap();

        // Guard: this test is meaningless if the env var is set globally
        if std::env::var(CLIENT_SECRET_ENV).is_ok() {
            return;
        }
        let err = ClientConfig::load(&config_path).unwrap_err();
        assert!(err.to_string().contains("client secret"));
    }

    #[test]
    fn load_rejects_empty_client_id() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("client.toml");
        std::fs::write(
            &config_path,
            "client_id = \"\"\nregion = \"us\"\nlocale = \"en_US\"\n\
             redirect_uri = \"https://example.org/cb\"\n",
        )
        .unwrap();

        let err = ClientConfig::load(&config_path).unwrap_err();
        assert!(err.to_string().contains("client_id"));
    }
}
