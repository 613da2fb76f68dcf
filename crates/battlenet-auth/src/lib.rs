//! Battle.net OAuth authentication library
//!
//! Provides grant-type strategies, token state, client-auth scheme
//! application, and MAC request signing for the Battle.net API client.
//! This crate is a standalone library with no dependency on the client
//! crate — it shapes token-endpoint requests and authorization material;
//! the client crate executes them.
//!
//! Token flow:
//! 1. Client resolves a grant strategy via `grant::resolve()`
//! 2. `token::build_token_request()` validates parameters and applies the
//!    client-auth scheme (URI/Form body credentials, or a Basic header)
//! 3. Client POSTs the result to the region token endpoint
//! 4. The returned access token is stored in a `TokenState`
//! 5. Per request, the token is attached as a query parameter, a
//!    Bearer/OAuth header, or a `mac::mac_authorization()` signature

pub mod error;
pub mod grant;
pub mod mac;
pub mod token;

pub use error::{Error, Result};
pub use grant::{GrantType, resolve};
pub use mac::mac_authorization;
pub use token::{
    AccessTokenType, ClientAuthType, TokenRequest, TokenState, build_token_request,
};
