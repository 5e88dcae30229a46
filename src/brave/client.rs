use crate::brave::responses::{DescriptionsResponse, PoiResponse, WebSearchResponse};
use crate::types::{DescriptionRecord, PlaceId, PoiRecord, Result, SearchError, SearchQuery};
use crate::utils::config::Settings;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const SUBSCRIPTION_TOKEN_HEADER: &str = "X-Subscription-Token";

/// Which slice of `/web/search` to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebSearchMode {
    /// Regular web results, paginated by `offset`.
    Web,
    /// Location results only (`result_filter=locations`), used to collect place ids.
    Locations,
}

/// Read-only access to the Brave Search API.
///
/// [`BraveClient`] talks HTTP; tests plug in their own implementation.
#[async_trait]
pub trait BraveApi: Send + Sync {
    /// `GET /web/search`
    async fn web_search(&self, query: &SearchQuery, mode: WebSearchMode)
        -> Result<WebSearchResponse>;

    /// `GET /local/pois` for a batch of place ids
    async fn local_pois(&self, ids: &[PlaceId]) -> Result<Vec<PoiRecord>>;

    /// `GET /local/descriptions` for a batch of place ids
    async fn local_descriptions(&self, ids: &[PlaceId]) -> Result<Vec<DescriptionRecord>>;
}

/// HTTP client for the Brave Search API.
#[derive(Clone)]
pub struct BraveClient {
    http: reqwest::Client,
    base_url: String,
    search_lang: String,
}

impl std::fmt::Debug for BraveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BraveClient")
            .field("base_url", &self.base_url)
            .field("search_lang", &self.search_lang)
            .finish_non_exhaustive()
    }
}

impl BraveClient {
    /// Build a client from validated settings.
    ///
    /// The subscription token is attached as a default header, so it never
    /// has to be threaded through individual requests (or logged).
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut token = HeaderValue::from_str(settings.api_key.trim()).map_err(|_| {
            SearchError::Configuration("API key contains invalid header characters".to_string())
        })?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(SUBSCRIPTION_TOKEN_HEADER, token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout())
            .build()
            .map_err(|e| SearchError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            search_lang: settings.search_lang.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?params, "Brave API request");

        let response = self.http.get(&url).query(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), path, "Brave API returned an error status");
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                body
            };
            return Err(SearchError::upstream(Some(status.as_u16()), message));
        }

        response.json::<T>().await.map_err(|e| {
            warn!(path, error = %e, "Brave API returned a malformed body");
            SearchError::upstream(
                Some(status.as_u16()),
                format!("Malformed response from {}: {}", path, e),
            )
        })
    }
}

fn id_params(ids: &[PlaceId]) -> Vec<(&'static str, String)> {
    ids.iter().map(|id| ("ids", id.0.clone())).collect()
}

#[async_trait]
impl BraveApi for BraveClient {
    async fn web_search(
        &self,
        query: &SearchQuery,
        mode: WebSearchMode,
    ) -> Result<WebSearchResponse> {
        let params = match mode {
            WebSearchMode::Web => vec![
                ("q", query.text.clone()),
                ("count", query.count.to_string()),
                ("offset", query.offset.to_string()),
            ],
            WebSearchMode::Locations => vec![
                ("q", query.text.clone()),
                ("search_lang", self.search_lang.clone()),
                ("result_filter", "locations".to_string()),
                ("count", query.count.to_string()),
            ],
        };

        self.get_json("/web/search", &params).await
    }

    async fn local_pois(&self, ids: &[PlaceId]) -> Result<Vec<PoiRecord>> {
        let response: PoiResponse = self.get_json("/local/pois", &id_params(ids)).await?;
        Ok(response.into_records())
    }

    async fn local_descriptions(&self, ids: &[PlaceId]) -> Result<Vec<DescriptionRecord>> {
        let response: DescriptionsResponse =
            self.get_json("/local/descriptions", &id_params(ids)).await?;
        Ok(response.into_records())
    }
}
