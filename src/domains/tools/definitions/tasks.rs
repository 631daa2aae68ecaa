//! Task-list tools backed by the shared [`TaskStore`].

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domains::tools::descriptor::{ParamKind, ParamSpec, ReturnKind, ToolDescriptor};
use crate::domains::tools::handler::{ToolHandler, parse_params};
use crate::storage::TaskStore;

/// Parameters for `add_task`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddTaskParams {
    /// The task title.
    pub task: String,
}

/// Append a pending task to the task file.
pub struct AddTaskTool {
    store: Arc<TaskStore>,
}

impl AddTaskTool {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ToolHandler for AddTaskTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "add_task",
            "Add a pending task to the task list",
            vec![ParamSpec::required(
                "task",
                ParamKind::String,
                "The task title",
            )],
            ReturnKind::Text,
        )
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: AddTaskParams = parse_params(arguments)?;
        let task = self.store.add(&params.task).await?;
        Ok(json!(format!(
            "Task '{}' added with ID {}",
            task.title, task.id
        )))
    }
}

/// List every stored task.
pub struct ListTasksTool {
    store: Arc<TaskStore>,
}

impl ListTasksTool {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ToolHandler for ListTasksTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "list_tasks",
            "List all tasks with their ids and statuses",
            vec![],
            ReturnKind::Json,
        )
    }

    async fn call(&self, _arguments: JsonObject) -> anyhow::Result<Value> {
        let tasks = self.store.list().await?;
        Ok(serde_json::to_value(tasks)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(json: &str) -> JsonObject {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn test_add_task_reports_id() {
        let dir = tempdir().unwrap();
        let store = Arc::new(TaskStore::new(dir.path().join("tasks.json")));

        let result = AddTaskTool::new(store)
            .call(args(r#"{"task": "water plants"}"#))
            .await
            .unwrap();
        assert_eq!(result, json!("Task 'water plants' added with ID 1"));
    }

    #[tokio::test]
    async fn test_list_tasks_payload_shape() {
        let dir = tempdir().unwrap();
        let store = Arc::new(TaskStore::new(dir.path().join("tasks.json")));
        store.add("one").await.unwrap();

        let result = ListTasksTool::new(store).call(args("{}")).await.unwrap();
        let list = result.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["title"], "one");
        assert_eq!(list[0]["status"], "pending");
        assert_eq!(list[0]["id"], 1);
    }
}
