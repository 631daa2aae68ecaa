//! Stock price tool backed by Alpha Vantage intraday data.

use reqwest::Client;
use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::common::{get_json, require_key, require_non_blank};
use crate::domains::tools::descriptor::{ParamKind, ParamSpec, ReturnKind, ToolDescriptor};
use crate::domains::tools::handler::{ToolHandler, parse_params};

const ALPHAVANTAGE_API_BASE: &str = "https://www.alphavantage.co/query";
const SERIES_KEY: &str = "Time Series (5min)";

/// Parameters for `get_stock_price`.
#[derive(Debug, Clone, Deserialize)]
pub struct StockPriceParams {
    /// The stock symbol to look up (e.g. 'AAPL', 'MSFT').
    pub symbol: String,
}

/// Latest intraday price information for a stock symbol.
pub struct StockPriceTool {
    client: Client,
    api_key: Option<String>,
}

impl StockPriceTool {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }

    /// Format the most recent bar of a 5-minute series.
    ///
    /// serde_json objects are sorted maps, and the series keys are
    /// lexicographic timestamps, so the newest bar is the *last* entry.
    fn format_latest(symbol: &str, series: &serde_json::Map<String, Value>) -> Option<String> {
        let (latest_time, bar) = series.iter().next_back()?;
        let field = |key: &str| bar[key].as_str().unwrap_or("N/A").to_string();

        Some(format!(
            "Symbol: {}\nPrice: ${}\nOpen: ${}\nHigh: ${}\nLow: ${}\nVolume: {}\nLast Updated: {}",
            symbol.to_uppercase(),
            field("4. close"),
            field("1. open"),
            field("2. high"),
            field("3. low"),
            field("5. volume"),
            latest_time,
        ))
    }
}

#[async_trait::async_trait]
impl ToolHandler for StockPriceTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "get_stock_price",
            "Get the latest intraday price information for a stock symbol",
            vec![ParamSpec::required(
                "symbol",
                ParamKind::String,
                "The stock symbol to look up (e.g. 'AAPL', 'MSFT')",
            )],
            ReturnKind::Text,
        )
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: StockPriceParams = parse_params(arguments)?;
        require_non_blank(&params.symbol, "stock symbol")?;
        let key = require_key(&self.api_key, "TOOLBOX_STOCKS_API_KEY")?;

        info!("Fetching stock price for {}", params.symbol);
        let data = get_json(
            &self.client,
            ALPHAVANTAGE_API_BASE,
            &[
                ("function", "TIME_SERIES_INTRADAY"),
                ("symbol", params.symbol.as_str()),
                ("interval", "5min"),
                ("apikey", key),
            ],
            &[],
        )
        .await?;

        if let Some(message) = data["Error Message"].as_str() {
            anyhow::bail!("Alpha Vantage error: {}", message);
        }

        let series = data[SERIES_KEY]
            .as_object()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("no stock data found for symbol '{}'", params.symbol)
            })?;

        let formatted = Self::format_latest(&params.symbol, series)
            .ok_or_else(|| anyhow::anyhow!("malformed series for '{}'", params.symbol))?;
        Ok(json!(formatted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::http_client;

    fn args(json: &str) -> JsonObject {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn test_blank_symbol_fails() {
        let tool = StockPriceTool::new(http_client(), Some("k".to_string()));
        let err = tool.call(args(r#"{"symbol": " "}"#)).await.unwrap_err();
        assert!(err.to_string().contains("stock symbol cannot be empty"));
    }

    #[tokio::test]
    async fn test_missing_key_is_an_error() {
        let tool = StockPriceTool::new(http_client(), None);
        let err = tool.call(args(r#"{"symbol": "AAPL"}"#)).await.unwrap_err();
        assert!(err.to_string().contains("TOOLBOX_STOCKS_API_KEY"));
    }

    #[test]
    fn test_format_latest_picks_newest_bar() {
        let series = json!({
            "2025-01-01 09:30:00": {"4. close": "10.00"},
            "2025-01-01 09:35:00": {"4. close": "11.00", "1. open": "10.50"},
        });
        let text =
            StockPriceTool::format_latest("aapl", series.as_object().unwrap()).unwrap();
        assert!(text.contains("Symbol: AAPL"));
        assert!(text.contains("Price: $11.00"));
        assert!(text.contains("Open: $10.50"));
        assert!(text.contains("Last Updated: 2025-01-01 09:35:00"));
    }

    #[test]
    fn test_format_latest_empty_series() {
        let series = serde_json::Map::new();
        assert!(StockPriceTool::format_latest("AAPL", &series).is_none());
    }
}
