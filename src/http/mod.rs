//! HTTP client module
//!
//! A retrying `reqwest` wrapper shared by every service operation:
//! configurable backoff, `Retry-After` handling, default headers, optional
//! client-side throttling, and per-request overrides.
//!
//! Retry policy lives here and only here; higher layers (including the
//! pager) never retry on their own.

mod client;
mod throttle;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use throttle::{Throttle, ThrottleConfig};

#[cfg(test)]
mod tests;
