//! Rust client for the Kalu dashboard API.
//!
//! Callers work with English field names and enum values; the backend stores
//! Portuguese ones. [`DashboardClient`] translates both ways using
//! `kalu-schema`, attaches the bearer token, and surfaces non-2xx responses as
//! [`ClientError::Api`] without retrying.

mod client;
mod endpoints;
mod error;
mod session;
mod types;

pub use client::DashboardClient;
pub use error::{ClientError, GENERIC_FAILURE};
pub use reqwest::Method;
pub use session::SessionToken;
pub use types::ClientConfig;
