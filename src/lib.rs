//! Toolbox MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing a small
//! toolbox of functions: calculator operations, file-backed notes and tasks,
//! weather lookups, news and stock retrieval, web search, and knowledge-base
//! search/ingestion.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler, and the
//!   transport layer
//! - **storage**: File-backed note and task stores shared between tools,
//!   resources, and prompts
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The tool registry/dispatcher and the tool definitions
//!   - **resources**: Read-only data accessors (`notes://latest`, templates)
//!   - **prompts**: Prompt templates for the calling host
//!
//! Every tool call, regardless of transport, flows through a single
//! [`domains::tools::ToolRegistry`] built once at startup: lookup, argument
//! validation, handler invocation, and failure classification all happen
//! there.
//!
//! # Example
//!
//! ```rust,no_run
//! use toolbox_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod storage;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
