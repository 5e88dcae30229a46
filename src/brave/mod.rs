//! Brave Search API access
//!
//! - [`client`] - the [`BraveApi`] trait and its reqwest-backed implementation
//! - [`responses`] - wire types for the three endpoints we consume
//!
//! Endpoints used (relative to the configured base URL):
//!
//! | Endpoint | Purpose |
//! |----------|---------|
//! | `GET /web/search` | web results, or place ids with `result_filter=locations` |
//! | `GET /local/pois` | point-of-interest details for a batch of place ids |
//! | `GET /local/descriptions` | AI-generated descriptions for a batch of place ids |

/// API client trait and HTTP implementation.
pub mod client;
/// JSON response shapes.
pub mod responses;

pub use client::{BraveApi, BraveClient, WebSearchMode};
pub use responses::{DescriptionsResponse, PoiResponse, WebSearchResponse};
