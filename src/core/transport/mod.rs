//! Transport layer for the MCP server.
//!
//! Two transports are available, selected via feature flags:
//! - **STDIO**: standard input/output (default for MCP) - feature: `stdio`
//! - **TCP**: JSON-RPC over a raw TCP socket - feature: `tcp`
//!
//! Whichever transport runs, tool calls reach the same [`ToolRegistry`]
//! dispatch path through the server handler.
//!
//! [`ToolRegistry`]: crate::domains::tools::ToolRegistry

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
