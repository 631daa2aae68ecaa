//! Resource service implementation.
//!
//! The ResourceService handles resource discovery and reads. Fixed resources
//! are resolved against their backing store; templated resources are
//! resolved from the parameter carried in the URI itself.

use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use tracing::info;

use super::definitions::{EchoResource, GreetingResource, LatestNoteResource, TemplatedResource};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::storage::NoteStore;

/// Service for listing and reading resources.
pub struct ResourceService {
    /// Note store backing `notes://latest`.
    notes: Arc<NoteStore>,

    /// Fixed resources.
    resources: Vec<Resource>,

    /// Templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    /// Create a new ResourceService over the given note store.
    pub fn new(notes: Arc<NoteStore>) -> Self {
        info!("Initializing ResourceService");

        Self {
            notes,
            resources: get_all_resources(),
            templates: get_all_resource_templates(),
        }
    }

    /// List all fixed resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources.clone()
    }

    /// List all resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let text = if uri == LatestNoteResource::URI {
            self.notes
                .latest()
                .await?
                .unwrap_or_else(|| LatestNoteResource::EMPTY_FALLBACK.to_string())
        } else if let Some(name) = GreetingResource::extract(uri) {
            GreetingResource::resolve(name)
        } else if let Some(message) = EchoResource::extract(uri) {
            EchoResource::resolve(message)
        } else {
            return Err(ResourceError::not_found(uri));
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn service(dir: &std::path::Path) -> ResourceService {
        ResourceService::new(Arc::new(NoteStore::new(dir.join("notes.txt"))))
    }

    #[tokio::test]
    async fn test_listing() {
        let dir = tempdir().unwrap();
        let service = service(dir.path());

        assert_eq!(service.list_resources().await.len(), 1);
        assert_eq!(service.list_resource_templates().await.len(), 2);
    }

    #[tokio::test]
    async fn test_read_latest_note_empty() {
        let dir = tempdir().unwrap();
        let service = service(dir.path());

        let result = service.read_resource("notes://latest").await.unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                assert_eq!(text, "No notes yet.");
            }
            other => panic!("expected text contents, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_latest_note_after_append() {
        let dir = tempdir().unwrap();
        let notes = Arc::new(NoteStore::new(dir.path().join("notes.txt")));
        notes.append("first").await.unwrap();
        notes.append("second").await.unwrap();

        let service = ResourceService::new(notes);
        let result = service.read_resource("notes://latest").await.unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => assert_eq!(text, "second"),
            other => panic!("expected text contents, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_greeting_template() {
        let dir = tempdir().unwrap();
        let service = service(dir.path());

        let result = service.read_resource("greeting://Ada").await.unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                assert_eq!(text, "Hello, Ada!");
            }
            other => panic!("expected text contents, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_unknown_uri() {
        let dir = tempdir().unwrap();
        let service = service(dir.path());

        let result = service.read_resource("nope://thing").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
