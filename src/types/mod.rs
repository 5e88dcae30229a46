use serde::{Deserialize, Deserializer, Serialize};

// ============= Search Types =============

/// A validated search request, ready to be sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub count: u32,
    pub offset: u32,
}

/// One web result, taken verbatim from the upstream response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// Opaque identifier of a place returned by a location search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub String);

impl PlaceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for PlaceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============= Local Types =============

/// Postal address of a point of interest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub address_locality: Option<String>,
    #[serde(default)]
    pub address_region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoiRating {
    #[serde(default)]
    pub rating_value: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<u64>,
}

/// Point-of-interest details keyed by [`PlaceId`].
///
/// A record with a missing or null `id` decodes with an empty id and is
/// discarded before the join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoiRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: PlaceId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<PostalAddress>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<PoiRating>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub opening_hours: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionRecord {
    pub id: PlaceId,
    pub text: String,
}

/// A POI joined with its (possibly empty) description.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedPlace {
    pub poi: PoiRecord,
    pub description: String,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Upstream error{}: {message}", http_status_suffix(.status))]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

fn http_status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl SearchError {
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Upstream {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for SearchError {
    fn from(err: config::ConfigError) -> Self {
        SearchError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
