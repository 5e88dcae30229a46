use crate::brave::{BraveApi, WebSearchMode};
use crate::search::no_results_message;
use crate::types::{Result, SearchQuery, WebResult};
use tracing::debug;

/// Results of one web search, consumed once by [`WebResults::render`].
#[derive(Debug)]
pub struct WebResults {
    query: String,
    results: std::vec::IntoIter<WebResult>,
}

impl WebResults {
    pub fn new(query: impl Into<String>, results: Vec<WebResult>) -> Self {
        Self {
            query: query.into(),
            results: results.into_iter(),
        }
    }

    /// Render the remaining results, one block per result.
    pub fn render(self) -> String {
        let query = self.query.clone();
        let blocks: Vec<String> = self.map(|result| format_web_result(&result)).collect();

        if blocks.is_empty() {
            no_results_message(&query)
        } else {
            blocks.join("\n\n")
        }
    }
}

impl Iterator for WebResults {
    type Item = WebResult;

    fn next(&mut self) -> Option<Self::Item> {
        self.results.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.results.size_hint()
    }
}

pub fn format_web_result(result: &WebResult) -> String {
    format!(
        "Title: {}\nURL: {}\nDescription: {}",
        result.title, result.url, result.description
    )
}

/// Run a validated web search.
pub async fn search(api: &dyn BraveApi, query: &SearchQuery) -> Result<WebResults> {
    let response = api.web_search(query, WebSearchMode::Web).await?;
    let results = response.into_web_results();
    debug!(query = %query.text, results = results.len(), "web search completed");
    Ok(WebResults::new(query.text.clone(), results))
}
