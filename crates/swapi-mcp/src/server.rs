//! MCP server handler
//!
//! Wires the SWAPI client into an rmcp tool router. Each tool handler
//! performs one upstream call and converts any failure into an error-flagged
//! result naming the attempted operation, so the transport never sees an
//! unhandled failure from a tool. The `all_films` resource instead surfaces
//! upstream failures as protocol errors: resource reads have no error flag
//! in their result envelope.

use rmcp::{
    ErrorData, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        AnnotateAble, ListResourcesResult, PaginatedRequestParam, RawResource,
        ReadResourceRequestParam, ReadResourceResult, ResourceContents, ServerCapabilities,
        ServerInfo,
    },
    schemars,
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router,
};
use serde::Deserialize;
use swapi_client::{SwapiClient, SwapiError};
use tracing::debug;

use crate::render;

/// URI of the passive film-catalog resource.
pub const FILMS_RESOURCE_URI: &str = "swapi://films/all";

/// Search input for the character tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CharacterQuery {
    #[schemars(description = "Character name to search for")]
    pub search: String,
}

/// Search input for the planet tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PlanetQuery {
    #[schemars(description = "Planet name to search for")]
    pub search: String,
}

/// Search input for the film tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FilmQuery {
    #[schemars(description = "Film title to search for")]
    pub search: String,
}

/// Input for the by-id character lookup.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CharacterId {
    #[schemars(description = "Numeric SWAPI id of the character")]
    pub id: u32,
}

/// Render a failure as a readable sentence naming the operation.
///
/// Upstream failures (non-2xx, transport) keep the upstream message or
/// body; anything else is the unexpected-error category.
fn describe_failure(operation: &str, err: &SwapiError) -> String {
    if err.is_upstream() {
        format!("Error while {operation}: {err}")
    } else {
        format!("Unexpected error while {operation}: {err}")
    }
}

/// MCP server exposing read-only SWAPI lookups.
#[derive(Clone)]
pub struct SwapiServer {
    client: SwapiClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router(router = tool_router)]
impl SwapiServer {
    /// Create a server around an already-configured client.
    ///
    /// The client is the only state the server holds and it is immutable,
    /// so concurrent invocations need no coordination.
    pub fn new(client: SwapiClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "search_characters",
        description = "Search Star Wars characters by name"
    )]
    async fn search_characters(
        &self,
        request: Parameters<CharacterQuery>,
    ) -> Result<String, String> {
        let query = request.0.search;
        debug!(%query, "search_characters");

        match self.client.search_people(&query).await {
            Ok(page) => Ok(render::character_search(&query, &page.results)),
            Err(err) => Err(describe_failure("searching characters", &err)),
        }
    }

    #[tool(name = "search_planets", description = "Search Star Wars planets by name")]
    async fn search_planets(&self, request: Parameters<PlanetQuery>) -> Result<String, String> {
        let query = request.0.search;
        debug!(%query, "search_planets");

        match self.client.search_planets(&query).await {
            Ok(page) => Ok(render::planet_search(&query, &page.results)),
            Err(err) => Err(describe_failure("searching planets", &err)),
        }
    }

    #[tool(name = "search_films", description = "Search Star Wars films by title")]
    async fn search_films(&self, request: Parameters<FilmQuery>) -> Result<String, String> {
        let query = request.0.search;
        debug!(%query, "search_films");

        match self.client.search_films(&query).await {
            Ok(page) => Ok(render::film_search(&query, &page.results)),
            Err(err) => Err(describe_failure("searching films", &err)),
        }
    }

    #[tool(
        name = "get_character_by_id",
        description = "Get details of a Star Wars character by its SWAPI id"
    )]
    async fn get_character_by_id(
        &self,
        request: Parameters<CharacterId>,
    ) -> Result<String, String> {
        let id = request.0.id;
        debug!(id, "get_character_by_id");

        match self.client.person_by_id(id).await {
            Ok(character) => Ok(render::character_details(&character)),
            Err(err) => Err(describe_failure(
                &format!("fetching character with id {id}"),
                &err,
            )),
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SwapiServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only Star Wars lookups backed by SWAPI. Use the search tools for \
                 characters, planets, and films; read swapi://films/all for the full \
                 saga list sorted by episode."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let mut films = RawResource::new(FILMS_RESOURCE_URI, "all_films".to_string());
        films.description = Some("All Star Wars films, sorted by episode number".to_string());
        films.mime_type = Some("text/plain".to_string());

        Ok(ListResourcesResult {
            meta: None,
            resources: vec![films.no_annotation()],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        if request.uri != FILMS_RESOURCE_URI {
            return Err(ErrorData::resource_not_found(
                format!("unknown resource: {}", request.uri),
                None,
            ));
        }

        debug!("read all_films resource");
        let page = self
            .client
            .all_films()
            .await
            .map_err(|err| ErrorData::internal_error(format!("Error while listing films: {err}"), None))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(
                render::film_catalog(&page.results),
                FILMS_RESOURCE_URI,
            )],
        })
    }
}
