//! Domains module containing the server's functionality by bounded context.
//!
//! Each subdomain covers one MCP surface: tools (the dispatchable handlers),
//! resources (readable URIs), and prompts (rendered templates).

pub mod prompts;
pub mod resources;
pub mod tools;
