//! Prompt service implementation.
//!
//! The PromptService maintains the registry of prompt templates, validates
//! caller arguments, gathers context values (the notes body), and renders
//! the final prompt text.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use tracing::info;

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;
use crate::storage::NoteStore;

#[cfg(test)]
use rmcp::model::PromptMessageContent;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Note store backing the `notes` context key.
    notes: Arc<NoteStore>,

    /// Registry of available prompts, keyed by name.
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService over the given note store.
    pub fn new(notes: Arc<NoteStore>) -> Self {
        info!("Initializing PromptService");

        let prompts = get_all_prompts()
            .into_iter()
            .map(|template| (template.name.clone(), template))
            .collect();

        Self { notes, prompts }
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted and context injected.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let mut values = arguments.unwrap_or_default();

        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !values.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        for key in template.context_keys {
            let value = self.resolve_context(key).await?;
            values.insert(key.to_string(), value);
        }

        let content = template.render(&values)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }

    /// Resolve one context key to its current value.
    async fn resolve_context(&self, key: &str) -> Result<String, PromptError> {
        match key {
            "notes" => Ok(self.notes.read_all().await?),
            other => Err(PromptError::template(format!(
                "unknown context key '{}'",
                other
            ))),
        }
    }
}
