//! # brave-search-mcp
//!
//! A Model Context Protocol server exposing the Brave Search API as two tools:
//!
//! | Tool | Description |
//! |------|-------------|
//! | `brave_web_search` | General web search with pagination (1-20 results, offset 0-9) |
//! | `brave_local_search` | Businesses and places, enriched with details and descriptions |
//!
//! Local search looks up place ids first. When there are none it answers with
//! a plain web search for the same query instead of failing.
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use brave_search_mcp::{BraveClient, SearchService, Settings};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> brave_search_mcp::Result<()> {
//!     let settings = Settings::load(None)?;
//!     let search = SearchService::new(Arc::new(BraveClient::new(&settings)?));
//!
//!     println!("{}", search.web_search("rust async runtimes", Some(3), None).await?);
//!     println!("{}", search.local_search("coffee near Times Square", None).await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`brave`] - Brave Search API client
//! - [`search`] - validation, execution and rendering of both searches
//! - [`mcp`] - rmcp tool server and transports
//! - [`cli`] - command-line interface
//! - [`types`] - data model and errors
//! - [`utils`] - configuration

#![warn(rustdoc::missing_crate_level_docs)]

/// Brave Search API client.
pub mod brave;
/// Command-line interface.
pub mod cli;
/// Model Context Protocol (MCP) server.
pub mod mcp;
/// Search operations.
pub mod search;
/// Core types and error handling.
pub mod types;
/// Configuration utilities.
pub mod utils;

pub use brave::{BraveApi, BraveClient};
pub use mcp::BraveMcpServer;
pub use search::SearchService;
pub use types::{Result, SearchError};
pub use utils::config::Settings;
