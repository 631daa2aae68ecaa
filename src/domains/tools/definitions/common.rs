//! Helpers shared across the network-backed tools.
//!
//! Every outbound call uses the same client settings: a common User-Agent
//! and a 30 second timeout. Failures (timeout, non-success status, bodies
//! that are not JSON) become errors for the dispatcher to classify; no tool
//! papers over them with a sentinel payload.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::warn;

/// User-Agent sent with every outbound request.
pub const USER_AGENT: &str = "toolbox-mcp/1.0";

/// Upper bound on any single outbound request.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared HTTP client.
///
/// Cheap to clone; one instance is created in `build_registry` and handed to
/// every network-backed tool.
pub fn http_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// GET a URL and decode the JSON body, with status-code handling.
pub async fn get_json(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
    headers: &[(&str, &str)],
) -> anyhow::Result<Value> {
    let mut request = client.get(url).query(query);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            warn!("Request to {} timed out", url);
            anyhow::anyhow!("request to {} timed out", url)
        } else {
            warn!("Request to {} failed: {}", url, e);
            anyhow::anyhow!("request to {} failed: {}", url, e)
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("HTTP {} for {}: {}", status, url, body);
        anyhow::bail!("HTTP {} for {}: {}", status, url, body);
    }

    response
        .json()
        .await
        .map_err(|e| anyhow::anyhow!("invalid JSON from {}: {}", url, e))
}

/// Resolve a configured API key or fail with the variable a user must set.
pub fn require_key<'a>(key: &'a Option<String>, var: &str) -> anyhow::Result<&'a str> {
    key.as_deref()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| anyhow::anyhow!("{} is not configured", var))
}

/// Reject blank string inputs (the schema only guarantees the type).
pub fn require_non_blank(value: &str, what: &str) -> anyhow::Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{} cannot be empty", what);
    }
    Ok(())
}
