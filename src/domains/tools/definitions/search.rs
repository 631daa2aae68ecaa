//! Web search tool backed by the DuckDuckGo Instant Answer API.

use reqwest::Client;
use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::common::{get_json, require_non_blank};
use crate::domains::tools::descriptor::{ParamKind, ParamSpec, ReturnKind, ToolDescriptor};
use crate::domains::tools::handler::{ToolHandler, parse_params};

const DDG_API_URL: &str = "https://api.duckduckgo.com/";

/// At most this many results are returned per query.
const MAX_RESULTS: usize = 10;

/// Parameters for `duckduckgo_search_results`.
#[derive(Debug, Clone, Deserialize)]
pub struct WebSearchParams {
    /// The search query to perform.
    pub query: String,
}

/// Search the web and return `{title, link}` pairs.
pub struct WebSearchTool {
    client: Client,
}

impl WebSearchTool {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Flatten the Instant Answer `RelatedTopics` tree into result pairs.
    ///
    /// Topics may be plain entries or nested one level under category nodes.
    fn collect_results(topics: &[Value], results: &mut Vec<Value>) {
        for topic in topics {
            if results.len() >= MAX_RESULTS {
                return;
            }
            if let Some(nested) = topic["Topics"].as_array() {
                Self::collect_results(nested, results);
                continue;
            }
            let (Some(text), Some(url)) = (topic["Text"].as_str(), topic["FirstURL"].as_str())
            else {
                continue;
            };
            results.push(json!({"title": text, "link": url}));
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for WebSearchTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "duckduckgo_search_results",
            "Fetch web search results from DuckDuckGo for a query",
            vec![ParamSpec::required(
                "query",
                ParamKind::String,
                "The search query to perform",
            )],
            ReturnKind::Json,
        )
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: WebSearchParams = parse_params(arguments)?;
        require_non_blank(&params.query, "query")?;

        info!("Searching DuckDuckGo for: {}", params.query);
        let data = get_json(
            &self.client,
            DDG_API_URL,
            &[
                ("q", params.query.as_str()),
                ("format", "json"),
                ("no_html", "1"),
            ],
            &[],
        )
        .await?;

        let topics = data["RelatedTopics"].as_array().cloned().unwrap_or_default();
        let mut results = Vec::new();
        Self::collect_results(&topics, &mut results);

        Ok(json!({"results": results}))
    }
}
