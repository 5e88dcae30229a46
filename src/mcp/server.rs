use crate::search::SearchService;
use crate::types::SearchError;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tracing::{info, warn};

/// Parameters for `brave_web_search`
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct WebSearchParams {
    /// Search query (max 400 chars, 50 words)
    pub query: String,
    /// Number of results (1-20, default 10)
    pub count: Option<i64>,
    /// Pagination offset (max 9, default 0)
    pub offset: Option<i64>,
}

/// Parameters for `brave_local_search`
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct LocalSearchParams {
    /// Local search query (e.g. 'pizza near Central Park')
    pub query: String,
    /// Number of results (1-20, default 5)
    pub count: Option<i64>,
}

/// MCP server exposing Brave web and local search as tools
#[derive(Clone)]
pub struct BraveMcpServer {
    search: SearchService,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BraveMcpServer {
    pub fn new(search: SearchService) -> Self {
        Self {
            search,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Performs a web search using the Brave Search API, ideal for general queries, \
                       news, articles, and online content. Use this for broad information gathering, \
                       recent events, or when you need diverse web sources. Supports pagination. \
                       Maximum 20 results per request."
    )]
    pub async fn brave_web_search(
        &self,
        params: Parameters<WebSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let WebSearchParams {
            query,
            count,
            offset,
        } = params.0;
        tool_result(self.search.web_search(&query, count, offset).await)
    }

    #[tool(
        description = "Searches for local businesses and places using Brave's Local Search API. \
                       Best for queries related to physical locations, businesses, restaurants, \
                       services, etc. Returns detailed information including business names, \
                       addresses, ratings, phone numbers, and opening hours. Use this when the \
                       query implies 'near me' or mentions specific locations. Automatically falls \
                       back to web search if no local results are found."
    )]
    pub async fn brave_local_search(
        &self,
        params: Parameters<LocalSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let LocalSearchParams { query, count } = params.0;
        tool_result(self.search.local_search(&query, count).await)
    }
}

impl BraveMcpServer {
    /// Tools this server registers, with their generated input schemas.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// Invalid arguments reject the call; upstream failures become an error result.
fn tool_result(result: crate::types::Result<String>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(SearchError::InvalidParameter(message)) => Err(McpError::invalid_params(message, None)),
        Err(e) => {
            warn!(error = %e, "tool call failed");
            Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
        }
    }
}

#[tool_handler]
impl ServerHandler for BraveMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "brave-search-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("Brave Search MCP Server".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Brave Search MCP Server - brave_web_search for general web results, \
                 brave_local_search for businesses and places (falls back to web search)"
                    .into(),
            ),
        }
    }
}

/// Serve over stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: BraveMcpServer) -> anyhow::Result<()> {
    use rmcp::{ServiceExt, transport::io::stdio};

    info!("Serving MCP over stdio");
    let running = server.serve(stdio()).await?;
    running.waiting().await?;
    Ok(())
}

/// Serve the streamable HTTP transport (stateless) until Ctrl-C.
pub async fn serve_http(server: BraveMcpServer, addr: SocketAddr, path: &str) -> anyhow::Result<()> {
    use rmcp::transport::StreamableHttpServerConfig;
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, tower::StreamableHttpService,
    };
    use tower_http::trace::TraceLayer;

    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig {
            stateful_mode: false,
            ..Default::default()
        },
    );

    let router = axum::Router::new()
        .nest_service(path, service)
        .layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, path, "Serving MCP over streamable HTTP");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
