//! # SWAPI Client
//!
//! Typed, read-only HTTP client for the public Star Wars API (SWAPI).
//!
//! Every operation is a single stateless GET against a fixed base URL with a
//! uniform request timeout. Responses are deserialized into explicit view
//! models; a body that does not match the declared shape is an error rather
//! than a silently degraded result.
//!
//! ## Example
//!
//! ```rust,no_run
//! use swapi_client::{SwapiClient, SwapiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), swapi_client::SwapiError> {
//!     let client = SwapiClient::new(SwapiConfig::default())?;
//!     let page = client.search_people("luke").await?;
//!     println!("{} result(s)", page.results.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::SwapiClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, SwapiConfig};
pub use error::{SwapiError, SwapiResult};
pub use model::{Character, Film, Planet, SearchPage};
