//! Authentication module
//!
//! Supports: API key exchange, static Bearer, Basic, and no auth.
//!
//! The `Authenticator` applies credentials to outgoing requests. For the
//! API key flow it exchanges the key for a short-lived bearer token at the
//! service token endpoint and caches the token until shortly before expiry.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken};
