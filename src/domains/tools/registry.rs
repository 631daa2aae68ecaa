//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is the single routing point of the server: every transport
//! hands tool invocations to [`ToolRegistry::dispatch`], which looks up the
//! handler, validates the arguments against the declared schema, invokes the
//! handler, and classifies any failure. The registry itself performs no I/O
//! and holds no mutable state after construction, so concurrent dispatches
//! need no locking.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use tracing::{debug, warn};

use super::definitions::{
    AddNoteTool, AddTaskTool, AddTool, CurrentWeatherTool, DivideTool, IngestDocumentsTool,
    ListTasksTool, MultiplyTool, NewsTool, ReadNotesTool, SearchDocsTool, StockPriceTool,
    SubtractTool, WeatherAlertsTool, WebSearchTool, common,
};
use super::descriptor::ToolDescriptor;
use super::error::ToolError;
use super::handler::ToolHandler;
use crate::core::config::Config;
use crate::storage::{NoteStore, TaskStore};

/// A registered tool: its declaration plus its handler.
struct RegisteredTool {
    descriptor: ToolDescriptor,
    handler: Arc<dyn ToolHandler>,
}

/// Tool registry - maps tool names to descriptors and handlers.
///
/// Built once at startup and read-only thereafter; there is no runtime
/// registration or unregistration.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<&'static str, RegisteredTool>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool handler under its declared name.
    ///
    /// Fails with [`ToolError::DuplicateTool`] if the name is taken.
    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) -> Result<(), ToolError> {
        let descriptor = handler.descriptor();
        let name = descriptor.name;
        if self.tools.contains_key(name) {
            return Err(ToolError::DuplicateTool(name.to_string()));
        }
        debug!("Registered tool: {}", name);
        self.tools.insert(
            name,
            RegisteredTool {
                descriptor,
                handler,
            },
        );
        Ok(())
    }

    /// Names of all registered tools.
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.tools.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Whether a tool name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// The descriptor of a registered tool, if any.
    pub fn descriptor(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name).map(|t| &t.descriptor)
    }

    /// All tools as MCP metadata models, sorted by name.
    pub fn list_tools(&self) -> Vec<Tool> {
        let mut entries: Vec<_> = self.tools.values().collect();
        entries.sort_unstable_by_key(|t| t.descriptor.name);
        entries.iter().map(|t| t.descriptor.to_tool()).collect()
    }

    /// Dispatch an invocation to the named tool.
    ///
    /// Failure classification:
    /// - unknown name -> [`ToolError::UnknownTool`], never a panic;
    /// - schema mismatch -> [`ToolError::InvalidArguments`] naming the
    ///   offending parameter(s), before the handler runs;
    /// - handler failure -> [`ToolError::Handler`] carrying the original
    ///   message.
    ///
    /// The dispatcher never retries; retry policy belongs to the caller.
    pub async fn dispatch(&self, name: &str, arguments: JsonObject) -> Result<Value, ToolError> {
        let entry = self.tools.get(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::unknown(name)
        })?;

        if let Err(problems) = entry.descriptor.validate(&arguments) {
            warn!("Invalid arguments for {}: {} problem(s)", name, problems.len());
            return Err(ToolError::invalid_arguments(name, problems));
        }

        debug!("Dispatching tool: {}", name);
        entry
            .handler
            .call(arguments)
            .await
            .map_err(|e| ToolError::handler(name, &e))
    }
}

/// Build the registry with every tool this server exposes.
///
/// Handlers receive their credentials, stores, and HTTP client here, at
/// startup; none of them touches the process environment afterwards.
pub fn build_registry(
    config: &Config,
    notes: Arc<NoteStore>,
    tasks: Arc<TaskStore>,
) -> Result<ToolRegistry, ToolError> {
    let client = common::http_client();
    let credentials = &config.credentials;

    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(AddTool))?;
    registry.register(Arc::new(SubtractTool))?;
    registry.register(Arc::new(MultiplyTool))?;
    registry.register(Arc::new(DivideTool))?;

    registry.register(Arc::new(AddNoteTool::new(notes.clone())))?;
    registry.register(Arc::new(ReadNotesTool::new(notes)))?;

    registry.register(Arc::new(AddTaskTool::new(tasks.clone())))?;
    registry.register(Arc::new(ListTasksTool::new(tasks)))?;

    registry.register(Arc::new(CurrentWeatherTool::new(
        client.clone(),
        credentials.weather_api_key.clone(),
    )))?;
    registry.register(Arc::new(WeatherAlertsTool::new(client.clone())))?;

    registry.register(Arc::new(NewsTool::new(
        client.clone(),
        credentials.news_api_key.clone(),
    )))?;
    registry.register(Arc::new(StockPriceTool::new(
        client.clone(),
        credentials.stocks_api_key.clone(),
    )))?;
    registry.register(Arc::new(WebSearchTool::new(client.clone())))?;

    registry.register(Arc::new(SearchDocsTool::new(
        client.clone(),
        config.knowledge_base.clone(),
        credentials.knowledge_base_api_key.clone(),
    )))?;
    registry.register(Arc::new(IngestDocumentsTool::new(
        client,
        config.knowledge_base.clone(),
        credentials.knowledge_base_api_key.clone(),
    )))?;

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::descriptor::{ParamKind, ParamSpec, ReturnKind};
    use serde_json::json;
    use std::time::Duration;

    fn args(json: &str) -> JsonObject {
        serde_json::from_str(json).unwrap()
    }

    /// A tool that sleeps before answering, for concurrency tests.
    struct SlowEchoTool {
        delay: Duration,
    }

    #[async_trait::async_trait]
    impl ToolHandler for SlowEchoTool {
        fn descriptor(&self) -> ToolDescriptor {
            ToolDescriptor::new(
                "slow_echo",
                "Echo after a delay",
                vec![ParamSpec::required(
                    "message",
                    ParamKind::String,
                    "Text to echo",
                )],
                ReturnKind::Text,
            )
        }

        async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
            tokio::time::sleep(self.delay).await;
            Ok(arguments["message"].clone())
        }
    }

    /// A tool that always fails, for error classification tests.
    struct FailingTool;

    #[async_trait::async_trait]
    impl ToolHandler for FailingTool {
        fn descriptor(&self) -> ToolDescriptor {
            ToolDescriptor::new("broken", "Always fails", vec![], ReturnKind::Text)
        }

        async fn call(&self, _arguments: JsonObject) -> anyhow::Result<Value> {
            anyhow::bail!("the backing service exploded")
        }
    }

    fn full_registry() -> ToolRegistry {
        let dir = std::env::temp_dir();
        let notes = Arc::new(NoteStore::new(dir.join("registry-test-notes.txt")));
        let tasks = Arc::new(TaskStore::new(dir.join("registry-test-tasks.json")));
        build_registry(&Config::default(), notes, tasks).unwrap()
    }

    #[test]
    fn test_build_registry_tool_names() {
        let registry = full_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 15);
        for name in [
            "add",
            "subtract",
            "multiply",
            "divide",
            "add_note",
            "read_notes",
            "add_task",
            "list_tasks",
            "fetch_weather",
            "get_alerts",
            "get_news",
            "get_stock_price",
            "duckduckgo_search_results",
            "search_doc_for_rag_context",
            "ingest_documents",
        ] {
            assert!(names.contains(&name), "missing tool {}", name);
        }
    }

    #[test]
    fn test_list_tools_metadata() {
        let registry = full_registry();
        let tools = registry.list_tools();
        assert_eq!(tools.len(), 15);
        let add = tools.iter().find(|t| t.name == "add").unwrap();
        let schema = add.input_schema.as_ref();
        assert_eq!(schema["properties"]["a"]["type"], "integer");
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(FailingTool)).unwrap();
        let err = registry.register(Arc::new(FailingTool)).unwrap_err();
        assert!(matches!(err, ToolError::DuplicateTool(name) if name == "broken"));
    }

    #[tokio::test]
    async fn test_dispatch_add_success() {
        let registry = full_registry();
        let result = registry
            .dispatch("add", args(r#"{"a": 2, "b": 3}"#))
            .await
            .unwrap();
        assert_eq!(result, json!(5));
        assert!(registry.descriptor("add").unwrap().returns.matches(&result));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let registry = full_registry();
        let err = registry
            .dispatch("nonexistent_tool", args("{}"))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(name) if name == "nonexistent_tool"));
    }

    #[tokio::test]
    async fn test_dispatch_invalid_arguments_before_handler() {
        let registry = full_registry();
        let err = registry
            .dispatch("add", args(r#"{"a": "x", "b": 3}"#))
            .await
            .unwrap_err();
        match err {
            ToolError::InvalidArguments { tool, problems } => {
                assert_eq!(tool, "add");
                assert_eq!(problems.len(), 1);
                assert_eq!(problems[0].param(), "a");
            }
            other => panic!("expected InvalidArguments, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_handler_failure_classified_with_original_message() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(FailingTool)).unwrap();

        let err = registry.dispatch("broken", args("{}")).await.unwrap_err();
        match err {
            ToolError::Handler { tool, message } => {
                assert_eq!(tool, "broken");
                assert!(message.contains("the backing service exploded"));
            }
            other => panic!("expected Handler, got {:?}", other),
        }

        // The registry keeps serving after a handler failure.
        assert!(registry.dispatch("broken", args("{}")).await.is_err());
    }

    #[tokio::test]
    async fn test_divide_by_zero_is_handler_error() {
        let registry = full_registry();
        let err = registry
            .dispatch("divide", args(r#"{"a": 1, "b": 0}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Handler { .. }));
        assert!(err.to_string().contains("Division by zero"));
    }

    #[tokio::test]
    async fn test_concurrent_slow_dispatches_do_not_serialize() {
        let mut registry = ToolRegistry::new();
        registry
            .register(Arc::new(SlowEchoTool {
                delay: Duration::from_millis(100),
            }))
            .unwrap();
        let registry = Arc::new(registry);

        let start = tokio::time::Instant::now();
        let (first, second) = tokio::join!(
            registry.dispatch("slow_echo", args(r#"{"message": "one"}"#)),
            registry.dispatch("slow_echo", args(r#"{"message": "two"}"#)),
        );
        let elapsed = start.elapsed();

        assert_eq!(first.unwrap(), json!("one"));
        assert_eq!(second.unwrap(), json!("two"));
        // Both ran while the other was suspended; well under 2x the delay.
        assert!(elapsed < Duration::from_millis(190), "took {:?}", elapsed);
    }
}
