use crate::types::{DescriptionRecord, PlaceId, PoiRecord, WebResult};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// Body of `GET /web/search`.
///
/// Only the sections we read are modelled; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct WebSearchResponse {
    #[serde(default)]
    pub web: Option<WebSection>,
    #[serde(default)]
    pub locations: Option<LocationSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebSection {
    #[serde(default)]
    pub results: Vec<WebResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationSection {
    #[serde(default)]
    pub results: Vec<LocationResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl WebSearchResponse {
    pub fn into_web_results(self) -> Vec<WebResult> {
        self.web.map(|w| w.results).unwrap_or_default()
    }

    /// Place ids in response order, first occurrence wins.
    pub fn place_ids(&self) -> Vec<PlaceId> {
        let Some(locations) = &self.locations else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        locations
            .results
            .iter()
            .filter_map(|loc| loc.id.as_deref())
            .filter(|id| !id.is_empty())
            .filter(|id| seen.insert(*id))
            .map(PlaceId::from)
            .collect()
    }
}

/// Body of `GET /local/pois`.
#[derive(Debug, Default, Deserialize)]
pub struct PoiResponse {
    #[serde(default)]
    pub results: Vec<PoiRecord>,
}

impl PoiResponse {
    /// Records that can be joined; id-less entries are dropped.
    pub fn into_records(self) -> Vec<PoiRecord> {
        self.results
            .into_iter()
            .filter(|poi| !poi.id.is_empty())
            .collect()
    }
}

/// Body of `GET /local/descriptions`.
///
/// The API returns a `results` list of `{id, description}` objects; some
/// deployments answer with a flat `descriptions` map instead. Both are read.
#[derive(Debug, Default, Deserialize)]
pub struct DescriptionsResponse {
    #[serde(default)]
    pub results: Vec<DescriptionEntry>,
    #[serde(default)]
    pub descriptions: BTreeMap<String, Option<String>>,
}

#[derive(Debug, Deserialize)]
pub struct DescriptionEntry {
    #[serde(default)]
    pub id: Option<PlaceId>,
    #[serde(default)]
    pub description: Option<String>,
}

impl DescriptionsResponse {
    pub fn into_records(self) -> Vec<DescriptionRecord> {
        let listed = self.results.into_iter().filter_map(|entry| {
            let id = entry.id.filter(|id| !id.is_empty())?;
            let text = entry.description?;
            Some(DescriptionRecord { id, text })
        });
        let mapped = self
            .descriptions
            .into_iter()
            .filter(|(id, _)| !id.is_empty())
            .filter_map(|(id, text)| {
                text.map(|text| DescriptionRecord {
                    id: PlaceId(id),
                    text,
                })
            });

        listed.chain(mapped).collect()
    }
}
