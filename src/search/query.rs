//! Query validation
//!
//! Turns raw tool arguments into a [`SearchQuery`]. The text is rejected when
//! it breaks the upstream limits; numeric knobs are clamped instead.

use crate::types::{Result, SearchError, SearchQuery};

pub const MAX_QUERY_CHARS: usize = 400;
pub const MAX_QUERY_WORDS: usize = 50;

pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 20;
pub const MAX_OFFSET: i64 = 9;

pub const DEFAULT_WEB_COUNT: u32 = 10;
pub const DEFAULT_LOCAL_COUNT: u32 = 5;

impl SearchQuery {
    /// Validate arguments for a web search.
    pub fn web(text: &str, count: Option<i64>, offset: Option<i64>) -> Result<Self> {
        Ok(Self {
            text: validate_text(text)?,
            count: clamp_count(count, DEFAULT_WEB_COUNT),
            offset: offset.map_or(0, |o| o.clamp(0, MAX_OFFSET) as u32),
        })
    }

    /// Validate arguments for a local search. Local lookups are never paginated.
    pub fn local(text: &str, count: Option<i64>) -> Result<Self> {
        Ok(Self {
            text: validate_text(text)?,
            count: clamp_count(count, DEFAULT_LOCAL_COUNT),
            offset: 0,
        })
    }

    /// The web query a local search degrades to when no places come back.
    pub fn web_fallback(&self) -> Self {
        Self {
            text: self.text.clone(),
            count: DEFAULT_WEB_COUNT,
            offset: 0,
        }
    }
}

fn validate_text(text: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(SearchError::InvalidParameter(
            "query must not be empty".to_string(),
        ));
    }

    let chars = text.chars().count();
    if chars > MAX_QUERY_CHARS {
        return Err(SearchError::InvalidParameter(format!(
            "query is {} characters long, maximum is {}",
            chars, MAX_QUERY_CHARS
        )));
    }

    let words = text.split_whitespace().count();
    if words > MAX_QUERY_WORDS {
        return Err(SearchError::InvalidParameter(format!(
            "query has {} words, maximum is {}",
            words, MAX_QUERY_WORDS
        )));
    }

    Ok(text.to_string())
}

fn clamp_count(count: Option<i64>, default: u32) -> u32 {
    count.map_or(default, |c| c.clamp(MIN_COUNT, MAX_COUNT) as u32)
}
