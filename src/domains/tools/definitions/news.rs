//! News retrieval tool backed by NewsAPI.

use reqwest::Client;
use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::common::{get_json, require_key, require_non_blank};
use crate::domains::tools::descriptor::{ParamKind, ParamSpec, ReturnKind, ToolDescriptor};
use crate::domains::tools::handler::{ToolHandler, parse_params};

const NEWS_API_BASE: &str = "https://newsapi.org/v2";

/// At most this many articles are formatted per call.
const MAX_ARTICLES: usize = 10;

/// Parameters for `get_news`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetNewsParams {
    /// The topic to search for (e.g. 'technology').
    pub topic: String,
}

/// Fetch recent news articles for a topic.
pub struct NewsTool {
    client: Client,
    api_key: Option<String>,
}

impl NewsTool {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }

    fn format_article(article: &Value) -> String {
        format!(
            "Title: {}\nSource: {}\nPublished: {}\nLink: {}",
            article["title"].as_str().unwrap_or("No title"),
            article["source"]["name"].as_str().unwrap_or("Unknown source"),
            article["publishedAt"].as_str().unwrap_or("Unknown date"),
            article["url"].as_str().unwrap_or("#"),
        )
    }
}

#[async_trait::async_trait]
impl ToolHandler for NewsTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "get_news",
            "Fetch recent news articles for a given topic, newest first",
            vec![ParamSpec::required(
                "topic",
                ParamKind::String,
                "The topic to search for news (e.g. 'technology')",
            )],
            ReturnKind::Text,
        )
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: GetNewsParams = parse_params(arguments)?;
        require_non_blank(&params.topic, "topic")?;
        let key = require_key(&self.api_key, "TOOLBOX_NEWS_API_KEY")?;

        info!("Fetching news for topic: {}", params.topic);
        let url = format!("{}/everything", NEWS_API_BASE);
        let data = get_json(
            &self.client,
            &url,
            &[
                ("q", params.topic.as_str()),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("apiKey", key),
            ],
            &[("X-Api-Key", key)],
        )
        .await?;

        let articles = data["articles"].as_array().cloned().unwrap_or_default();
        if articles.is_empty() {
            return Ok(json!("No articles found for the given topic"));
        }

        let formatted: Vec<String> = articles
            .iter()
            .take(MAX_ARTICLES)
            .map(Self::format_article)
            .collect();
        Ok(json!(formatted.join("\n---\n")))
    }
}
