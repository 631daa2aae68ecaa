//! Note-taking tools backed by the shared [`NoteStore`].

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::domains::tools::descriptor::{ParamKind, ParamSpec, ReturnKind, ToolDescriptor};
use crate::domains::tools::handler::{ToolHandler, parse_params};
use crate::storage::NoteStore;

/// Parameters for `add_note`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddNoteParams {
    /// The note content to append.
    pub message: String,
}

/// Append a note to the notes file.
pub struct AddNoteTool {
    store: Arc<NoteStore>,
}

impl AddNoteTool {
    pub fn new(store: Arc<NoteStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ToolHandler for AddNoteTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "add_note",
            "Append a new note to the note file",
            vec![ParamSpec::required(
                "message",
                ParamKind::String,
                "The note content to be added",
            )],
            ReturnKind::Text,
        )
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: AddNoteParams = parse_params(arguments)?;
        self.store
            .append(&params.message)
            .await
            .map_err(|e| anyhow::anyhow!("failed to write note: {}", e))?;
        info!("Note appended to {}", self.store.path().display());
        Ok(json!("Note saved successfully!"))
    }
}

/// Read back every stored note.
pub struct ReadNotesTool {
    store: Arc<NoteStore>,
}

impl ReadNotesTool {
    pub fn new(store: Arc<NoteStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ToolHandler for ReadNotesTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "read_notes",
            "Read and return all notes from the note file",
            vec![],
            ReturnKind::Text,
        )
    }

    async fn call(&self, _arguments: JsonObject) -> anyhow::Result<Value> {
        let content = self
            .store
            .read_all()
            .await
            .map_err(|e| anyhow::anyhow!("failed to read notes: {}", e))?;
        if content.is_empty() {
            Ok(json!("No notes yet."))
        } else {
            Ok(json!(content))
        }
    }
}
