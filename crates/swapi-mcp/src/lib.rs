//! # SWAPI MCP Server
//!
//! Exposes read-only Star Wars lookups over the Model Context Protocol,
//! backed by the public SWAPI REST API.
//!
//! Four tools (`search_characters`, `search_planets`, `search_films`,
//! `get_character_by_id`) plus one passive resource (`swapi://films/all`).
//! Every operation is a single upstream GET followed by client-side text
//! formatting; there is no state shared between invocations beyond the
//! immutable HTTP client configuration.
//!
//! ## Example
//!
//! ```rust,no_run
//! use swapi_client::{SwapiClient, SwapiConfig};
//! use swapi_mcp::SwapiServer;
//! use rmcp::{ServiceExt, transport::stdio};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SwapiClient::new(SwapiConfig::default())?;
//!     let service = SwapiServer::new(client).serve(stdio()).await?;
//!     service.waiting().await?;
//!     Ok(())
//! }
//! ```

pub mod render;
pub mod server;

pub use server::{FILMS_RESOURCE_URI, SwapiServer};
