//! Resources domain module.
//!
//! Resources are read-only, parameterized data accessors exposed alongside
//! tools: the latest note, a greeting template, and an echo template.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::TemplatedResource;
pub use error::ResourceError;
pub use registry::{get_all_resource_templates, get_all_resources, resource_uris};
pub use service::ResourceService;
