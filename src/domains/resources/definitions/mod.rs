//! Resource definitions module.
//!
//! Two shapes of resource exist here:
//! - fixed resources with a single URI (`notes://latest`), resolved by the
//!   service against a backing store;
//! - templated resources (`greeting://{name}`, `echo://{message}`), resolved
//!   purely from the parameter embedded in the URI.
//!
//! ## Adding a New Templated Resource
//!
//! 1. Create a new file implementing [`TemplatedResource`]
//! 2. Export it here
//! 3. Register it in `registry.rs` and match its scheme in `service.rs`

mod echo;
mod greeting;
mod latest_note;

pub use echo::EchoResource;
pub use greeting::GreetingResource;
pub use latest_note::LatestNoteResource;

/// A resource whose URI carries a single parameter after the scheme,
/// e.g. `greeting://{name}`.
pub trait TemplatedResource {
    /// URI prefix up to and including `://`.
    const PREFIX: &'static str;

    /// RFC 6570 style template advertised to clients.
    const URI_TEMPLATE: &'static str;

    /// Display name of the template.
    const NAME: &'static str;

    /// Description shown to clients.
    const DESCRIPTION: &'static str;

    /// MIME type of resolved content.
    const MIME_TYPE: &'static str;

    /// Extract the parameter if the URI belongs to this template.
    fn extract(uri: &str) -> Option<&str> {
        uri.strip_prefix(Self::PREFIX).filter(|p| !p.is_empty())
    }

    /// Resolve the parameter into content.
    fn resolve(param: &str) -> String;
}
