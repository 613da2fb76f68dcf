//! Common types for the Battle.net API workspace

mod secret;

pub use secret::SecretString;
