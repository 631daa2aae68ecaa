//! Prompt definitions module.
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file implementing [`PromptDefinition`]
//! 2. Export it here
//! 3. Register in `registry.rs`

mod note_summary;

pub use note_summary::NoteSummaryPrompt;

use rmcp::model::PromptArgument;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with `{{variable}}` placeholders.
    fn template() -> &'static str;

    /// The arguments callers may supply.
    fn arguments() -> Vec<PromptArgument> {
        Vec::new()
    }

    /// Context values the service injects at render time.
    fn context_keys() -> &'static [&'static str] {
        &[]
    }
}
