//! Note summary prompt definition.

use super::PromptDefinition;

/// Asks the model to summarize the current notes.
///
/// Takes no caller arguments; the notes body is injected by the service.
pub struct NoteSummaryPrompt;

impl PromptDefinition for NoteSummaryPrompt {
    const NAME: &'static str = "note_summary";
    const DESCRIPTION: &'static str = "Generate a prompt asking the AI to summarize all current notes";

    fn template() -> &'static str {
        "{{#if notes}}Summarize the current notes: {{notes}}{{else}}There are no notes yet.{{/if}}"
    }

    fn context_keys() -> &'static [&'static str] {
        &["notes"]
    }
}
