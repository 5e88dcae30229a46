//! Search operations
//!
//! - [`query`] - argument validation and clamping
//! - [`web`] - web search and its text rendering
//! - [`local`] - local search with enrichment and web fallback
//!
//! [`SearchService`] ties them together behind a shared [`BraveApi`] and is
//! what the MCP server and the CLI call.

/// Argument validation.
pub mod query;
/// Local business search.
pub mod local;
/// General web search.
pub mod web;

use crate::brave::BraveApi;
use crate::types::{Result, SearchQuery};
use std::sync::Arc;
use tracing::instrument;

/// Text returned when a search yields nothing to show.
pub fn no_results_message(query: &str) -> String {
    format!("No results found for: {}", query)
}

/// Validates, executes and renders searches.
#[derive(Clone)]
pub struct SearchService {
    api: Arc<dyn BraveApi>,
}

impl SearchService {
    pub fn new(api: Arc<dyn BraveApi>) -> Self {
        Self { api }
    }

    /// Web search rendered as text. Defaults: `count` 10, `offset` 0.
    #[instrument(skip(self), fields(tool = "web"))]
    pub async fn web_search(
        &self,
        query: &str,
        count: Option<i64>,
        offset: Option<i64>,
    ) -> Result<String> {
        let query = SearchQuery::web(query, count, offset)?;
        Ok(web::search(self.api.as_ref(), &query).await?.render())
    }

    /// Local search rendered as text. Default `count` 5.
    #[instrument(skip(self), fields(tool = "local"))]
    pub async fn local_search(&self, query: &str, count: Option<i64>) -> Result<String> {
        let query = SearchQuery::local(query, count)?;
        local::search(self.api.as_ref(), &query).await
    }
}
