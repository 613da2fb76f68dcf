//! Battle.net WoW API client
//!
//! OAuth2 wrapper over the Blizzard Battle.net game-data web service.
//! Authenticates once via a grant-type strategy, caches the bearer token,
//! and builds correctly-shaped requests for the ~150 named resource
//! endpoints, each with its URL template and API namespace.
//!
//! Call flow:
//! 1. `ClientConfig` supplies credentials, region, and locale
//! 2. `ApiClient::new()` acquires a client-credentials token
//! 3. `client.fetch("item", params)` resolves the endpoint, attaches
//!    auth, dispatches over the `Transport`, and returns the normalized
//!    envelope
//!
//! The transport is pluggable; `ReqwestTransport` is the production
//! implementation. Grant strategies, token state, and MAC signing live in
//! the `battlenet-auth` crate.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod region;
pub mod response;
pub mod transport;

pub use battlenet_auth::{AccessTokenType, ClientAuthType, TokenState};
pub use client::{ApiClient, Usage};
pub use config::ClientConfig;
pub use endpoint::{Namespace, classify, resolve};
pub use error::{Error, Result};
pub use region::{Region, RegionConfig};
pub use response::{Envelope, FetchResult};
pub use transport::{
    FormContentType, Method, ReqwestTransport, Transport, TransportFailure, TransportOptions,
    TransportRequest, TransportResponse,
};
