//! Knowledge-base tools: context search and document ingestion.
//!
//! Both talk to an HTTP knowledge-base service (bucket-scoped search over
//! previously ingested documents). The base URL and bucket come from
//! configuration; the API key is passed per request as `X-API-Key`.

use std::path::Path;

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::common::{require_key, require_non_blank};
use crate::core::config::KnowledgeBaseConfig;
use crate::domains::tools::descriptor::{ParamKind, ParamSpec, ReturnKind, ToolDescriptor};
use crate::domains::tools::handler::{ToolHandler, parse_params};

/// Chunks retrieved per search.
const SEARCH_TOP_N: usize = 5;

fn require_bucket(config: &KnowledgeBaseConfig) -> anyhow::Result<&str> {
    config
        .bucket_id
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("TOOLBOX_KB_BUCKET is not configured"))
}

/// Parameters for `search_doc_for_rag_context`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchDocsParams {
    /// The search query supplied by the user.
    pub query: String,
}

/// Retrieve relevant text chunks from the knowledge base.
pub struct SearchDocsTool {
    client: Client,
    config: KnowledgeBaseConfig,
    api_key: Option<String>,
}

impl SearchDocsTool {
    pub fn new(client: Client, config: KnowledgeBaseConfig, api_key: Option<String>) -> Self {
        Self {
            client,
            config,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for SearchDocsTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "search_doc_for_rag_context",
            "Search the knowledge base and return relevant text content for a query",
            vec![ParamSpec::required(
                "query",
                ParamKind::String,
                "The search query supplied by the user",
            )],
            ReturnKind::Text,
        )
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: SearchDocsParams = parse_params(arguments)?;
        require_non_blank(&params.query, "query")?;
        let key = require_key(&self.api_key, "TOOLBOX_KB_API_KEY")?;
        let bucket = require_bucket(&self.config)?;

        info!("Searching knowledge base bucket {}", bucket);
        let url = format!("{}/search/{}", self.config.base_url, bucket);
        let response = self
            .client
            .post(&url)
            .header("X-API-Key", key)
            .json(&json!({"query": params.query, "n": SEARCH_TOP_N}))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("knowledge-base search failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("knowledge-base search returned HTTP {}", status);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("invalid JSON from knowledge base: {}", e))?;

        let text = body["search"]["text"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("knowledge-base response is missing search text"))?;
        Ok(json!(text))
    }
}

/// Parameters for `ingest_documents`.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestDocumentsParams {
    /// Path to the local file to ingest.
    pub local_file_path: String,
}

/// Upload a local PDF into the knowledge base.
pub struct IngestDocumentsTool {
    client: Client,
    config: KnowledgeBaseConfig,
    api_key: Option<String>,
}

impl IngestDocumentsTool {
    pub fn new(client: Client, config: KnowledgeBaseConfig, api_key: Option<String>) -> Self {
        Self {
            client,
            config,
            api_key,
        }
    }

    /// Validate the path and extract a file name for the upload.
    fn validate_path(path: &Path) -> anyhow::Result<String> {
        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            anyhow::bail!("Only PDF files are supported");
        }
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .ok_or_else(|| anyhow::anyhow!("invalid file name: {}", path.display()))
    }
}

#[async_trait::async_trait]
impl ToolHandler for IngestDocumentsTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "ingest_documents",
            "Ingest a local PDF document into the knowledge base",
            vec![ParamSpec::required(
                "local_file_path",
                ParamKind::String,
                "The path to the local file containing the documents to ingest",
            )],
            ReturnKind::Text,
        )
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: IngestDocumentsParams = parse_params(arguments)?;
        let key = require_key(&self.api_key, "TOOLBOX_KB_API_KEY")?;
        let bucket = require_bucket(&self.config)?.to_string();

        let path = Path::new(&params.local_file_path);
        let file_name = Self::validate_path(path)?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;

        info!("Ingesting {} into bucket {}", file_name, bucket);
        let form = Form::new()
            .text("bucketId", bucket)
            .text("fileType", "pdf")
            .part(
                "file",
                Part::bytes(bytes)
                    .file_name(file_name.clone())
                    .mime_str("application/pdf")?,
            );

        let url = format!("{}/ingest/documents/local", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .header("X-API-Key", key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("ingestion upload failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("ingestion returned HTTP {}", status);
        }

        Ok(json!(format!(
            "Ingested {} into the knowledge base. It should be available in a few minutes",
            file_name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::http_client;
    use tempfile::tempdir;

    fn args(json: &str) -> JsonObject {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_validate_path_missing_file() {
        let err = IngestDocumentsTool::validate_path(Path::new("/does/not/exist.pdf"))
            .unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_validate_path_rejects_non_pdf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "hi").unwrap();

        let err = IngestDocumentsTool::validate_path(&path).unwrap_err();
        assert_eq!(err.to_string(), "Only PDF files are supported");
    }

    #[test]
    fn test_validate_path_accepts_pdf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Doc.PDF");
        std::fs::write(&path, "%PDF-1.4").unwrap();

        let name = IngestDocumentsTool::validate_path(&path).unwrap();
        assert_eq!(name, "Doc.PDF");
    }

    #[tokio::test]
    async fn test_search_without_bucket_fails() {
        let tool = SearchDocsTool::new(
            http_client(),
            KnowledgeBaseConfig {
                bucket_id: None,
                ..Default::default()
            },
            Some("k".to_string()),
        );
        let err = tool.call(args(r#"{"query": "q"}"#)).await.unwrap_err();
        assert!(err.to_string().contains("TOOLBOX_KB_BUCKET"));
    }

    #[tokio::test]
    async fn test_search_without_key_fails() {
        let tool = SearchDocsTool::new(http_client(), KnowledgeBaseConfig::default(), None);
        let err = tool.call(args(r#"{"query": "q"}"#)).await.unwrap_err();
        assert!(err.to_string().contains("TOOLBOX_KB_API_KEY"));
    }
}
