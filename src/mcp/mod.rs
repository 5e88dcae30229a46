//! Model Context Protocol surface
//!
//! [`server::BraveMcpServer`] registers `brave_web_search` and
//! `brave_local_search` with rmcp and can be served over stdio or
//! streamable HTTP.

/// Tool router, server handler and transports.
pub mod server;

pub use server::{BraveMcpServer, LocalSearchParams, WebSearchParams, serve_http, serve_stdio};
