//! Weather tools: current conditions (WeatherAPI) and US alerts (NWS).

use reqwest::Client;
use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::common::{get_json, require_key, require_non_blank};
use crate::domains::tools::descriptor::{ParamKind, ParamSpec, ReturnKind, ToolDescriptor};
use crate::domains::tools::handler::{ToolHandler, parse_params};

const WEATHERAPI_CURRENT_URL: &str = "http://api.weatherapi.com/v1/current.json";
const NWS_API_BASE: &str = "https://api.weather.gov";

/// Two-letter US state codes accepted by `get_alerts`.
const VALID_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

/// Parameters for `fetch_weather`.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchWeatherParams {
    /// The city name to query.
    pub city: String,
}

/// Current weather conditions for a city via WeatherAPI.
pub struct CurrentWeatherTool {
    client: Client,
    api_key: Option<String>,
}

impl CurrentWeatherTool {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }
}

#[async_trait::async_trait]
impl ToolHandler for CurrentWeatherTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "fetch_weather",
            "Fetch current weather for a city, including temperature and condition",
            vec![ParamSpec::required(
                "city",
                ParamKind::String,
                "The city name to query",
            )],
            ReturnKind::Json,
        )
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: FetchWeatherParams = parse_params(arguments)?;
        require_non_blank(&params.city, "city")?;
        let key = require_key(&self.api_key, "TOOLBOX_WEATHER_API_KEY")?;

        info!("Fetching current weather for {}", params.city);
        let data = get_json(
            &self.client,
            WEATHERAPI_CURRENT_URL,
            &[("key", key), ("q", &params.city), ("aqi", "no")],
            &[],
        )
        .await?;

        if data.get("current").is_none() {
            anyhow::bail!("Invalid weather data received");
        }
        Ok(data)
    }
}

/// Parameters for `get_alerts`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetAlertsParams {
    /// Two-letter US state code (e.g. 'CA', 'NY').
    pub state: String,
}

/// Active weather alerts for a US state via the National Weather Service.
///
/// The NWS API needs no key, only a User-Agent.
pub struct WeatherAlertsTool {
    client: Client,
}

impl WeatherAlertsTool {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Format one alert feature into readable text.
    fn format_alert(feature: &Value) -> String {
        let props = &feature["properties"];
        let field = |key: &str, fallback: &str| -> String {
            props[key]
                .as_str()
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        format!(
            "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
            field("event", "Unknown"),
            field("areaDesc", "Unknown"),
            field("severity", "Unknown"),
            field("description", "No description available"),
            field("instruction", "No specific instructions provided"),
        )
    }
}

#[async_trait::async_trait]
impl ToolHandler for WeatherAlertsTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "get_alerts",
            "Get active weather alerts for a US state (two-letter state code)",
            vec![ParamSpec::required(
                "state",
                ParamKind::String,
                "Two-letter US state code (e.g. 'CA', 'NY')",
            )],
            ReturnKind::Text,
        )
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: GetAlertsParams = parse_params(arguments)?;
        let state = params.state.to_uppercase();
        if !VALID_STATES.contains(&state.as_str()) {
            anyhow::bail!(
                "Invalid state code: {}. Use a two-letter US state code.",
                state
            );
        }

        info!("Fetching weather alerts for {}", state);
        let url = format!("{}/alerts/active/area/{}", NWS_API_BASE, state);
        let data = get_json(
            &self.client,
            &url,
            &[],
            &[("Accept", "application/geo+json")],
        )
        .await?;

        let features = data["features"]
            .as_array()
            .ok_or_else(|| anyhow::anyhow!("unexpected alerts payload from {}", url))?;

        if features.is_empty() {
            return Ok(json!("No active alerts for this state."));
        }

        let alerts: Vec<String> = features.iter().map(Self::format_alert).collect();
        Ok(json!(alerts.join("\n---\n")))
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
    async fn test_fetch_weather_without_key_fails() {
        let tool = CurrentWeatherTool::new(http_client(), None);
        let err = tool.call(args(r#"{"city": "Paris"}"#)).await.unwrap_err();
        assert!(err.to_string().contains("TOOLBOX_WEATHER_API_KEY"));
    }

    #[tokio::test]
    async fn test_fetch_weather_blank_city_fails() {
        let tool = CurrentWeatherTool::new(http_client(), Some("k".to_string()));
        let err = tool.call(args(r#"{"city": "  "}"#)).await.unwrap_err();
        assert!(err.to_string().contains("city"));
    }

    #[tokio::test]
    async fn test_get_alerts_rejects_bad_state() {
        let tool = WeatherAlertsTool::new(http_client());
        let err = tool.call(args(r#"{"state": "zz"}"#)).await.unwrap_err();
        assert!(err.to_string().contains("Invalid state code: ZZ"));
    }

    #[test]
    fn test_format_alert_fills_fallbacks() {
        let feature = json!({"properties": {"event": "Flood Warning"}});
        let text = WeatherAlertsTool::format_alert(&feature);
        assert!(text.contains("Event: Flood Warning"));
        assert!(text.contains("Area: Unknown"));
        assert!(text.contains("Instructions: No specific instructions provided"));
    }

    #[test]
    fn test_valid_states_count() {
        assert_eq!(VALID_STATES.len(), 50);
    }
}
