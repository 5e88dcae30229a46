//! Local search: place lookup, enrichment and fallback
//!
//! ```text
//! Start -> WebLookup -+-> Enriched -> merge -> render -+-> Done
//!                     |                                 |
//!                     +-> Fallback (plain web search) --+
//! ```
//!
//! The lookup outcome is a [`LocalLookup`]; each variant has its own
//! rendering path. When enriching, the POI and description requests run
//! concurrently and either failing fails the whole search.

use crate::brave::{BraveApi, WebSearchMode};
use crate::search::{no_results_message, web};
use crate::types::{
    DescriptionRecord, MergedPlace, PlaceId, PoiRecord, PostalAddress, Result, SearchQuery,
};
use std::collections::HashMap;
use tracing::{debug, info};

const NOT_AVAILABLE: &str = "N/A";

/// Outcome of the location lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalLookup {
    /// Place ids to enrich, in the order the lookup returned them
    Enriched(Vec<PlaceId>),
    /// No places; answer with a web search instead
    Empty,
}

impl From<Vec<PlaceId>> for LocalLookup {
    fn from(ids: Vec<PlaceId>) -> Self {
        if ids.is_empty() {
            LocalLookup::Empty
        } else {
            LocalLookup::Enriched(ids)
        }
    }
}

pub async fn lookup(api: &dyn BraveApi, query: &SearchQuery) -> Result<LocalLookup> {
    let response = api.web_search(query, WebSearchMode::Locations).await?;
    Ok(response.place_ids().into())
}

/// Fetch details and descriptions for `ids` and join them.
pub async fn enrich(api: &dyn BraveApi, ids: &[PlaceId]) -> Result<Vec<MergedPlace>> {
    let (pois, descriptions) =
        tokio::try_join!(api.local_pois(ids), api.local_descriptions(ids))?;
    debug!(
        ids = ids.len(),
        pois = pois.len(),
        descriptions = descriptions.len(),
        "enrichment responses received"
    );
    Ok(merge_places(ids, pois, descriptions))
}

/// Left-join POIs with descriptions, ordered by `ids`.
///
/// An id without a POI record is dropped; a POI without a description gets
/// an empty one.
pub fn merge_places(
    ids: &[PlaceId],
    pois: Vec<PoiRecord>,
    descriptions: Vec<DescriptionRecord>,
) -> Vec<MergedPlace> {
    let mut pois: HashMap<PlaceId, PoiRecord> =
        pois.into_iter().map(|poi| (poi.id.clone(), poi)).collect();
    let mut descriptions: HashMap<PlaceId, String> = descriptions
        .into_iter()
        .map(|record| (record.id, record.text))
        .collect();

    ids.iter()
        .filter_map(|id| {
            let poi = pois.remove(id)?;
            let description = descriptions.remove(id).unwrap_or_default();
            Some(MergedPlace { poi, description })
        })
        .collect()
}

pub fn format_address(address: Option<&PostalAddress>) -> String {
    let Some(address) = address else {
        return NOT_AVAILABLE.to_string();
    };

    let parts: Vec<&str> = [
        &address.street_address,
        &address.address_locality,
        &address.address_region,
        &address.postal_code,
    ]
    .into_iter()
    .filter_map(|part| part.as_deref())
    .filter(|part| !part.is_empty())
    .collect();

    if parts.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        parts.join(", ")
    }
}

fn format_rating(poi: &PoiRecord) -> String {
    match poi.rating.as_ref().and_then(|r| r.rating_value.map(|v| (v, r.rating_count))) {
        Some((value, count)) => format!("{:.1} ({} reviews)", value, count.unwrap_or(0)),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn or_not_available(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_AVAILABLE)
}

pub fn format_place(place: &MergedPlace) -> String {
    let poi = &place.poi;
    let hours = if poi.opening_hours.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        poi.opening_hours.join(", ")
    };

    let mut block = format!(
        "Name: {}\nAddress: {}\nPhone: {}\nRating: {}\nPrice Range: {}\nHours: {}",
        poi.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Unknown"),
        format_address(poi.address.as_ref()),
        or_not_available(poi.phone.as_deref()),
        format_rating(poi),
        or_not_available(poi.price_range.as_deref()),
        hours,
    );

    if !place.description.is_empty() {
        block.push_str("\nDescription: ");
        block.push_str(&place.description);
    }

    block
}

pub fn render_places(query: &str, places: &[MergedPlace]) -> String {
    if places.is_empty() {
        return no_results_message(query);
    }

    places
        .iter()
        .map(format_place)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Run a validated local search, falling back to web search when the
/// lookup finds no places.
pub async fn search(api: &dyn BraveApi, query: &SearchQuery) -> Result<String> {
    match lookup(api, query).await? {
        LocalLookup::Empty => {
            info!(query = %query.text, "no local results, falling back to web search");
            let fallback = query.web_fallback();
            Ok(web::search(api, &fallback).await?.render())
        }
        LocalLookup::Enriched(ids) => {
            debug!(query = %query.text, places = ids.len(), "enriching local results");
            let places = enrich(api, &ids).await?;
            Ok(render_places(&query.text, &places))
        }
    }
}
