//! JSON-file task storage.
//!
//! Tasks live in a single JSON array file. Ids are 1-based and sequential.
//! The read-modify-write cycle in `add` is serialized with an async mutex so
//! concurrent invocations cannot lose tasks or duplicate ids.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// A single task entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Done,
}

/// File-backed task store.
pub struct TaskStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TaskStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Load the task list; a missing file reads as an empty list.
    pub async fn list(&self) -> anyhow::Result<Vec<Task>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let tasks = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("tasks file is corrupt: {}", e))?;
        Ok(tasks)
    }

    /// Append a pending task and return it with its assigned id.
    pub async fn add(&self, title: &str) -> anyhow::Result<Task> {
        let _guard = self.write_lock.lock().await;

        let mut tasks = self.list().await?;
        let task = Task {
            id: tasks.len() as u64 + 1,
            title: title.to_string(),
            status: TaskStatus::Pending,
            created_at: Utc::now(),
        };
        tasks.push(task.clone());

        debug!("Writing {} task(s) to {}", tasks.len(), self.path.display());
        fs::write(&self.path, serde_json::to_vec(&tasks)?).await?;
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.json"));

        let first = store.add("buy milk").await.unwrap();
        let second = store.add("walk dog").await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn test_list_empty_when_file_missing() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.json"));

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_round_trips() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.json"));

        store.add("one").await.unwrap();
        store.add("two").await.unwrap();

        let tasks = store.list().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].title, "two");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "not json").unwrap();

        let store = TaskStore::new(path);
        assert!(store.list().await.is_err());
    }
}
