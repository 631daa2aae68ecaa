//! Tool-specific error types.
//!
//! Dispatch failures fall into exactly three kinds: the name is unknown, the
//! arguments do not match the declared schema, or the handler itself failed.
//! `DuplicateTool` is the one registration-time failure and never reaches a
//! dispatching caller.

use thiserror::Error;

use super::descriptor::ArgumentProblem;

/// Errors produced by the tool registry.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not registered.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The supplied arguments do not match the tool's declared schema.
    #[error("invalid arguments for '{tool}': {}", ProblemList(problems))]
    InvalidArguments {
        tool: String,
        problems: Vec<ArgumentProblem>,
    },

    /// The handler failed; carries the handler's original message.
    #[error("tool '{tool}' failed: {message}")]
    Handler { tool: String, message: String },

    /// A tool with this name is already registered.
    #[error("tool already registered: {0}")]
    DuplicateTool(String),
}

impl ToolError {
    /// Create an "unknown tool" error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create an "invalid arguments" error for a tool.
    pub fn invalid_arguments(tool: impl Into<String>, problems: Vec<ArgumentProblem>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            problems,
        }
    }

    /// Wrap a handler failure, preserving its message.
    pub fn handler(tool: impl Into<String>, source: &anyhow::Error) -> Self {
        Self::Handler {
            tool: tool.into(),
            // "{:#}" keeps the context chain in one line
            message: format!("{:#}", source),
        }
    }
}

/// Display helper joining argument problems with "; ".
struct ProblemList<'a>(&'a [ArgumentProblem]);

impl std::fmt::Display for ProblemList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, problem) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", problem)?;
        }
        Ok(())
    }
}
