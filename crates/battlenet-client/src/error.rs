//! Error types for the Battle.net API client

use thiserror::Error;

/// Client errors: caller-input mistakes (unknown resource, missing path
/// field, unknown region), configuration and config-file problems, and
/// token-exchange failures. Per-request transport failures are NOT
/// represented here — they are soft-surfaced in the response envelope and
/// recorded on the client instance.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown Battle.net API request '{0}'")]
    UnknownResource(String),

    #[error("missing parameter '{0}'")]
    MissingParameter(String),

    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("transport construction failed: {0}")]
    Transport(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("reading configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Auth(#[from] battlenet_auth::Error),
}

/// Result alias using client Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_offending_name() {
        assert_eq!(
            Error::UnknownResource("totally_bogus".into()).to_string(),
            "unknown Battle.net API request 'totally_bogus'"
        );
        assert_eq!(
            Error::UnknownRegion("XX".into()).to_string(),
            "unknown region 'XX'"
        );
    }

    #[test]
    fn config_errors_name_their_concern() {
        assert_eq!(
            Error::Config("client_id must not be empty".into()).to_string(),
            "configuration error: client_id must not be empty"
        );

        let io_err: Error =
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();
        assert!(
            io_err.to_string().starts_with("reading configuration:"),
            "got: {io_err}"
        );
    }

    #[test]
    fn auth_errors_convert_transparently() {
        let err: Error = battlenet_auth::Error::UnknownGrantType("implicit".into()).into();
        assert_eq!(err.to_string(), "unknown grant type 'implicit'");
    }
}
