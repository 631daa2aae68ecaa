//! Tools domain module.
//!
//! The registry/dispatcher lives here together with every tool definition.
//!
//! ## Architecture
//!
//! - `descriptor.rs` - Tool declarations: name, parameter schema, return tag
//! - `handler.rs` - The `ToolHandler` trait every tool implements
//! - `registry.rs` - Registration and dispatch (lookup, validation,
//!   invocation, failure classification)
//! - `error.rs` - The dispatch error taxonomy
//! - `definitions/` - Tool implementations, grouped by backing service
//!
//! ## Adding a New Tool
//!
//! 1. Implement `ToolHandler` in a file under `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `registry.rs::build_registry`

pub mod definitions;
pub mod descriptor;
mod error;
mod handler;
mod registry;

pub use descriptor::{ArgumentProblem, ParamKind, ParamSpec, ReturnKind, ToolDescriptor};
pub use error::ToolError;
pub use handler::{ToolHandler, parse_params};
pub use registry::{ToolRegistry, build_registry};
