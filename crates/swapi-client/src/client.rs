//! HTTP client for the upstream API
//!
//! One GET per operation, no retries, no caching. The underlying
//! `reqwest::Client` is cheap to clone and carries the fixed timeout.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::SwapiConfig;
use crate::error::{SwapiError, SwapiResult};
use crate::model::{Character, Film, Planet, SearchPage};

/// Read-only client over the SWAPI REST endpoints.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    /// Build a client from the given configuration.
    ///
    /// The timeout is baked into the underlying HTTP client so every
    /// request issued through it is bounded uniformly.
    pub fn new(config: SwapiConfig) -> SwapiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search characters by name: `GET /people/?search=`.
    pub async fn search_people(&self, query: &str) -> SwapiResult<SearchPage<Character>> {
        self.get_json("/people/", Some(query)).await
    }

    /// Search planets by name: `GET /planets/?search=`.
    pub async fn search_planets(&self, query: &str) -> SwapiResult<SearchPage<Planet>> {
        self.get_json("/planets/", Some(query)).await
    }

    /// Search films by title: `GET /films/?search=`.
    pub async fn search_films(&self, query: &str) -> SwapiResult<SearchPage<Film>> {
        self.get_json("/films/", Some(query)).await
    }

    /// Fetch a single character: `GET /people/{id}/`.
    ///
    /// A missing id surfaces as [`SwapiError::UpstreamStatus`] with the
    /// upstream 404 body; there is no zero-result branch.
    pub async fn person_by_id(&self, id: u32) -> SwapiResult<Character> {
        self.get_json(&format!("/people/{id}/"), None).await
    }

    /// Fetch the full film list: `GET /films/` with no query.
    pub async fn all_films(&self) -> SwapiResult<SearchPage<Film>> {
        self.get_json("/films/", None).await
    }

    /// Perform one GET and deserialize the body.
    ///
    /// The body is read as text first so the three failure categories stay
    /// distinct: non-2xx keeps the body verbatim, transport failures map to
    /// `Transport`, and a shape mismatch maps to `UnexpectedShape`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        search: Option<&str>,
    ) -> SwapiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, search, "GET upstream");

        let mut request = self.http.get(&url);
        if let Some(query) = search {
            request = request.query(&[("search", query)]);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SwapiError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
