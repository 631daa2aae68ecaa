//! The handler seam every tool implements.

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::descriptor::ToolDescriptor;

/// Trait for tool handlers.
///
/// A handler declares itself through [`ToolDescriptor`] and implements the
/// actual behavior in `call`. By the time `call` runs, the registry has
/// already validated the arguments against the descriptor, so handlers may
/// assume declared parameters are present with the declared types.
///
/// Handlers fail fast: any downstream failure (network timeout, bad HTTP
/// status, malformed response, file I/O) is returned as an error and the
/// registry reclassifies it for the caller. Handlers never panic on bad
/// input and never swallow failures into sentinel payloads.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// The tool's immutable declaration.
    fn descriptor(&self) -> ToolDescriptor;

    /// Execute the tool with validated arguments.
    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value>;
}

/// Deserialize a validated argument map into a typed parameter struct.
pub fn parse_params<T: DeserializeOwned>(arguments: JsonObject) -> anyhow::Result<T> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| anyhow::anyhow!("failed to decode arguments: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Params {
        a: i64,
        b: i64,
    }

    #[test]
    fn test_parse_params() {
        let args: JsonObject = serde_json::from_str(r#"{"a": 2, "b": 3}"#).unwrap();
        let params: Params = parse_params(args).unwrap();
        assert_eq!(params.a, 2);
        assert_eq!(params.b, 3);
    }
}
