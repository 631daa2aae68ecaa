//! Prompt templates and their rendering.
//!
//! Templates use `{{variable}}` placeholders and a single level of
//! `{{#if variable}}...{{else}}...{{/if}}` conditionals. Values come from
//! two places: caller-supplied arguments and context values the service
//! injects at render time (e.g. the current notes body).

use std::collections::HashMap;

use rmcp::model::PromptArgument;

use super::error::PromptError;

/// A prompt template that can be instantiated with values.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// Arguments the caller may supply.
    pub arguments: Vec<PromptArgument>,

    /// Names of values the service injects at render time.
    pub context_keys: &'static [&'static str],

    /// The template string with placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Render the template with the given values.
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut out = render_conditionals(&self.template, values)?;
        for (key, value) in values {
            out = out.replace(&format!("{{{{{}}}}}", key), value);
        }
        Ok(out)
    }
}

/// Expand every `{{#if var}}...{{else}}...{{/if}}` block. A variable counts
/// as set when it is present and non-empty.
fn render_conditionals(
    template: &str,
    values: &HashMap<String, String>,
) -> Result<String, PromptError> {
    const IF_OPEN: &str = "{{#if ";
    const ELSE_TAG: &str = "{{else}}";
    const END_TAG: &str = "{{/if}}";

    let mut out = template.to_string();

    while let Some(start) = out.find(IF_OPEN) {
        let var_close = out[start..]
            .find("}}")
            .map(|i| start + i)
            .ok_or_else(|| PromptError::template("unclosed {{#if}} tag"))?;
        let var = out[start + IF_OPEN.len()..var_close].trim().to_string();

        let end = out[var_close..]
            .find(END_TAG)
            .map(|i| var_close + i)
            .ok_or_else(|| PromptError::template("missing {{/if}} tag"))?;

        let body = &out[var_close + 2..end];
        let (when_set, when_unset) = match body.find(ELSE_TAG) {
            Some(pos) => (&body[..pos], &body[pos + ELSE_TAG.len()..]),
            None => (body, ""),
        };

        let is_set = values.get(&var).is_some_and(|v| !v.is_empty());
        let replacement = if is_set { when_set } else { when_unset }.to_string();

        out.replace_range(start..end + END_TAG.len(), &replacement);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(text: &str) -> PromptTemplate {
        PromptTemplate {
            name: "test".to_string(),
            description: None,
            arguments: vec![],
            context_keys: &[],
            template: text.to_string(),
        }
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let t = template("Hello, {{name}}!");
        assert_eq!(
            t.render(&values(&[("name", "World")])).unwrap(),
            "Hello, World!"
        );
    }

    #[test]
    fn test_conditional_set() {
        let t = template("{{#if notes}}Notes: {{notes}}{{else}}Nothing.{{/if}}");
        assert_eq!(
            t.render(&values(&[("notes", "buy milk")])).unwrap(),
            "Notes: buy milk"
        );
    }

    #[test]
    fn test_conditional_unset_takes_else() {
        let t = template("{{#if notes}}Notes: {{notes}}{{else}}Nothing.{{/if}}");
        assert_eq!(t.render(&values(&[("notes", "")])).unwrap(), "Nothing.");
        assert_eq!(t.render(&HashMap::new()).unwrap(), "Nothing.");
    }

    #[test]
    fn test_unclosed_if_is_template_error() {
        let t = template("{{#if notes}}oops");
        assert!(matches!(
            t.render(&HashMap::new()),
            Err(PromptError::Template(_))
        ));
    }
}
