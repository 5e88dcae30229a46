//! MCP server tests
//!
//! Drive the tool methods directly with a mocked Brave API and check how
//! results and errors surface to an MCP client.

mod common;

use brave_search_mcp::mcp::{BraveMcpServer, LocalSearchParams, WebSearchParams};
use brave_search_mcp::search::SearchService;
use common::mocks::{MockBraveApi, description, poi, web_result};
use rmcp::ServerHandler;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, ErrorCode};
use std::sync::Arc;

fn server(api: &MockBraveApi) -> BraveMcpServer {
    BraveMcpServer::new(SearchService::new(Arc::new(api.clone())))
}

fn text_of(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text().map(|t| t.text.clone()))
        .collect::<Vec<_>>()
        .join("")
}

fn web_params(query: &str) -> Parameters<WebSearchParams> {
    Parameters(WebSearchParams {
        query: query.to_string(),
        count: None,
        offset: None,
    })
}

#[test]
fn test_server_info_advertises_tools() {
    let info = server(&MockBraveApi::new()).get_info();

    assert_eq!(info.server_info.name, "brave-search-mcp");
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.unwrap().contains("brave_local_search"));
}

#[test]
fn test_tool_definitions() {
    let tools = server(&MockBraveApi::new()).tools();

    let mut names: Vec<String> = tools.iter().map(|t| t.name.to_string()).collect();
    names.sort();
    assert_eq!(names, vec!["brave_local_search", "brave_web_search"]);

    for tool in &tools {
        assert!(tool.description.as_ref().is_some_and(|d| !d.is_empty()));
        let properties = tool.input_schema.get("properties").unwrap();
        assert!(properties.get("query").is_some());
        assert!(properties.get("count").is_some());
    }

    let web = tools.iter().find(|t| t.name == "brave_web_search").unwrap();
    assert!(web.input_schema["properties"].get("offset").is_some());
    let local = tools.iter().find(|t| t.name == "brave_local_search").unwrap();
    assert!(local.input_schema["properties"].get("offset").is_none());
}

#[tokio::test]
async fn test_web_tool_success() {
    let api = MockBraveApi::new().with_web_results(vec![web_result(1)]);

    let result = server(&api)
        .brave_web_search(web_params("python programming"))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert!(text_of(&result).starts_with("Title: Result 1\n"));
}

#[tokio::test]
async fn test_web_tool_no_results_is_success() {
    let result = server(&MockBraveApi::new())
        .brave_web_search(web_params("nothing"))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert_eq!(text_of(&result), "No results found for: nothing");
}

#[tokio::test]
async fn test_invalid_query_is_rejected_as_invalid_params() {
    let api = MockBraveApi::new();

    let err = server(&api)
        .brave_web_search(web_params(&"word ".repeat(60)))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("words"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_upstream_failure_is_error_result() {
    let api = MockBraveApi::new()
        .with_places(&["A"])
        .with_descriptions(vec![description("A", "desc")])
        .failing_pois(500);

    let result = server(&api)
        .brave_local_search(Parameters(LocalSearchParams {
            query: "cafes".to_string(),
            count: Some(3),
        }))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    assert!(text_of(&result).contains("HTTP 500"));
}

#[tokio::test]
async fn test_local_tool_success() {
    let api = MockBraveApi::new()
        .with_places(&["A"])
        .with_pois(vec![poi("A", "Alpha Cafe")]);

    let result = server(&api)
        .brave_local_search(Parameters(LocalSearchParams {
            query: "cafes".to_string(),
            count: None,
        }))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert!(text_of(&result).starts_with("Name: Alpha Cafe\n"));
}
