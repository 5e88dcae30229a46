//! Mock implementations for testing.
//!
//! [`MockBraveApi`] answers the three Brave endpoints from canned data and
//! records every call, so tests can check both the rendered output and which
//! upstream requests were (or were not) made.

#![allow(dead_code)]

use async_trait::async_trait;
use brave_search_mcp::brave::responses::{
    LocationResult, LocationSection, WebSearchResponse, WebSection,
};
use brave_search_mcp::brave::{BraveApi, WebSearchMode};
use brave_search_mcp::types::{
    DescriptionRecord, PlaceId, PoiRecord, Result, SearchError, SearchQuery, WebResult,
};
use std::sync::{Arc, Mutex};

/// An upstream request seen by the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Web(SearchQuery),
    Locations(SearchQuery),
    Pois(Vec<PlaceId>),
    Descriptions(Vec<PlaceId>),
}

/// Mock Brave API with configurable responses and failures.
///
/// # Examples
///
/// ```ignore
/// let api = MockBraveApi::new()
///     .with_places(&["A", "B"])
///     .with_pois(vec![poi("A", "Alpha"), poi("B", "Bravo")])
///     .failing_descriptions(503);
/// ```
#[derive(Clone, Default)]
pub struct MockBraveApi {
    web_results: Vec<WebResult>,
    place_ids: Vec<String>,
    pois: Vec<PoiRecord>,
    descriptions: Vec<DescriptionRecord>,
    web_failure: Option<u16>,
    poi_failure: Option<u16>,
    description_failure: Option<u16>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockBraveApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_web_results(mut self, results: Vec<WebResult>) -> Self {
        self.web_results = results;
        self
    }

    pub fn with_places(mut self, ids: &[&str]) -> Self {
        self.place_ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_pois(mut self, pois: Vec<PoiRecord>) -> Self {
        self.pois = pois;
        self
    }

    pub fn with_descriptions(mut self, descriptions: Vec<DescriptionRecord>) -> Self {
        self.descriptions = descriptions;
        self
    }

    pub fn failing_web(mut self, status: u16) -> Self {
        self.web_failure = Some(status);
        self
    }

    pub fn failing_pois(mut self, status: u16) -> Self {
        self.poi_failure = Some(status);
        self
    }

    pub fn failing_descriptions(mut self, status: u16) -> Self {
        self.description_failure = Some(status);
        self
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn failure(status: u16, endpoint: &str) -> SearchError {
    SearchError::upstream(Some(status), format!("mock {} failure", endpoint))
}

#[async_trait]
impl BraveApi for MockBraveApi {
    async fn web_search(
        &self,
        query: &SearchQuery,
        mode: WebSearchMode,
    ) -> Result<WebSearchResponse> {
        match mode {
            WebSearchMode::Web => self.record(Call::Web(query.clone())),
            WebSearchMode::Locations => self.record(Call::Locations(query.clone())),
        }

        if let Some(status) = self.web_failure {
            return Err(failure(status, "web"));
        }

        Ok(match mode {
            WebSearchMode::Web => WebSearchResponse {
                web: Some(WebSection {
                    results: self.web_results.clone(),
                }),
                locations: None,
            },
            WebSearchMode::Locations => WebSearchResponse {
                web: None,
                locations: Some(LocationSection {
                    results: self
                        .place_ids
                        .iter()
                        .map(|id| LocationResult {
                            id: Some(id.clone()),
                            title: None,
                        })
                        .collect(),
                }),
            },
        })
    }

    async fn local_pois(&self, ids: &[PlaceId]) -> Result<Vec<PoiRecord>> {
        self.record(Call::Pois(ids.to_vec()));
        if let Some(status) = self.poi_failure {
            return Err(failure(status, "pois"));
        }
        Ok(self.pois.clone())
    }

    async fn local_descriptions(&self, ids: &[PlaceId]) -> Result<Vec<DescriptionRecord>> {
        self.record(Call::Descriptions(ids.to_vec()));
        if let Some(status) = self.description_failure {
            return Err(failure(status, "descriptions"));
        }
        Ok(self.descriptions.clone())
    }
}

// ============= Fixtures =============

pub fn web_result(n: usize) -> WebResult {
    WebResult {
        title: format!("Result {}", n),
        url: format!("https://example.com/{}", n),
        description: format!("Snippet for result {}", n),
    }
}

pub fn poi(id: &str, name: &str) -> PoiRecord {
    PoiRecord {
        id: PlaceId::from(id),
        name: Some(name.to_string()),
        address: None,
        phone: None,
        rating: None,
        price_range: None,
        opening_hours: vec![],
    }
}

pub fn description(id: &str, text: &str) -> DescriptionRecord {
    DescriptionRecord {
        id: PlaceId::from(id),
        text: text.to_string(),
    }
}
