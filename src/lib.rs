//! # Warden SDK
//!
//! Rust client for the Warden access-group management API.
//!
//! ## Features
//!
//! - **Typed operations**: group CRUD and membership management with
//!   `Option<T>` fields everywhere the wire format makes a field optional
//! - **Pagination**: one generic offset [`Pager`](pagination::Pager) drives
//!   every paged list endpoint via the service's `next` links
//! - **Auth**: API key exchange with cached bearer tokens, or static
//!   bearer/basic credentials
//! - **Resilient HTTP**: retries with configurable backoff, `Retry-After`
//!   handling, and client-side throttling
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use warden_sdk::{Result, ServiceConfig, WardenClient};
//! use warden_sdk::service::ListGroupsOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = WardenClient::new(ServiceConfig::from_env())?;
//!
//!     // One page at a time
//!     let options = ListGroupsOptions::new("my-account").limit(50);
//!     let page = client.list_groups(&options).await?;
//!
//!     // Or let the pager walk the next links
//!     let mut pager = client.groups_pager(ListGroupsOptions::new("my-account"))?;
//!     while pager.has_next() {
//!         for group in pager.get_next().await? {
//!             println!("{:?}", group.name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Service configuration
pub mod config;

/// Authentication
pub mod auth;

/// HTTP client with retry and throttling
pub mod http;

/// Offset-based pagination
pub mod pagination;

/// Shared random source
pub mod random;

/// Typed service operations
pub mod service;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use service::WardenClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
