//! Error types for OAuth authentication operations

/// Errors from grant resolution, token-request shaping, and MAC signing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown grant type '{0}'")]
    UnknownGrantType(String),

    #[error("missing parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("unknown client auth type '{0}'")]
    InvalidClientAuthType(String),

    #[error("unknown access token type '{0}'")]
    InvalidAccessTokenType(String),

    #[error("unsupported MAC algorithm '{0}'")]
    UnsupportedAlgorithm(String),

    #[error("unparseable request URL: {0}")]
    InvalidUrl(String),
}

/// Result alias for auth operations.
pub type Result<T> = std::result::Result<T, Error>;
