//! # KinGraph API Client
//!
//! Rust client library for the KinGraph backend info endpoint.
//!
//! ## Example
//!
//! ```no_run
//! use kingraph_api::InfoClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Base URL from KINGRAPH_API_URL, defaulting to the local backend
//!     let client = InfoClient::from_env();
//!
//!     let info = client.info().await?;
//!     println!("{} {}", info.name, info.version);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - Single `GET /api/v1/info` call returning a typed payload
//! - Typed failure taxonomy: transport, HTTP status, parse
//! - User-facing message derivation with the server-supplied message
//!   preferred over transport details

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{DEFAULT_BASE_URL, InfoClient};
pub use error::{ApiError, DEFAULT_ERROR_MESSAGE};
pub use types::InfoResponse;
