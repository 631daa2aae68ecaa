//! Tool descriptors: declared names, parameter schemas, and return tags.
//!
//! A [`ToolDescriptor`] is the immutable declaration a tool makes when it is
//! registered: a unique name, an ordered list of typed parameters, and a
//! return-kind tag. The registry validates every invocation against the
//! descriptor before the handler runs.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{Map, Value, json};

/// The JSON type a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParamKind {
    /// JSON Schema type name for this kind.
    pub fn schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    /// Whether `value` conforms to this kind.
    ///
    /// `Number` accepts any JSON number; `Integer` only accepts numbers with
    /// no fractional part representable as i64/u64.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.as_i64().is_some() || value.as_u64().is_some(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
        }
    }
}

/// Name of the JSON type of a value, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single declared parameter of a tool.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    /// A required parameter.
    pub fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }

    /// An optional parameter.
    pub fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }
}

/// Tag describing the shape of a tool's success payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    /// Human-readable text.
    Text,
    /// A single JSON number.
    Number,
    /// An arbitrary JSON document.
    Json,
}

impl ReturnKind {
    /// Whether `value` conforms to this return kind.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::Number => value.is_number(),
            Self::Json => true,
        }
    }
}

/// A problem found while validating one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentProblem {
    /// A required parameter was absent.
    Missing { name: String },

    /// An argument was supplied that the tool does not declare.
    Unexpected { name: String },

    /// An argument had the wrong JSON type.
    WrongType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ArgumentProblem {
    /// The name of the offending parameter.
    pub fn param(&self) -> &str {
        match self {
            Self::Missing { name } | Self::Unexpected { name } | Self::WrongType { name, .. } => {
                name
            }
        }
    }
}

impl std::fmt::Display for ArgumentProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { name } => write!(f, "missing required parameter '{}'", name),
            Self::Unexpected { name } => write!(f, "unexpected parameter '{}'", name),
            Self::WrongType {
                name,
                expected,
                found,
            } => write!(
                f,
                "parameter '{}' expected {}, got {}",
                name, expected, found
            ),
        }
    }
}

/// The immutable declaration of a registered tool.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    /// Unique tool name within a registry.
    pub name: &'static str,

    /// Human-readable description shown to clients.
    pub description: &'static str,

    /// Ordered list of declared parameters.
    pub params: Vec<ParamSpec>,

    /// Shape of the success payload.
    pub returns: ReturnKind,
}

impl ToolDescriptor {
    pub fn new(
        name: &'static str,
        description: &'static str,
        params: Vec<ParamSpec>,
        returns: ReturnKind,
    ) -> Self {
        Self {
            name,
            description,
            params,
            returns,
        }
    }

    /// Validate an argument map against the declared parameters.
    ///
    /// Returns every problem found, so the caller sees all offending
    /// parameters at once rather than the first one only.
    pub fn validate(&self, arguments: &JsonObject) -> Result<(), Vec<ArgumentProblem>> {
        let mut problems = Vec::new();

        for param in &self.params {
            match arguments.get(param.name) {
                Some(value) => {
                    if !param.kind.matches(value) {
                        problems.push(ArgumentProblem::WrongType {
                            name: param.name.to_string(),
                            expected: param.kind.schema_type(),
                            found: json_type_name(value),
                        });
                    }
                }
                None if param.required => {
                    problems.push(ArgumentProblem::Missing {
                        name: param.name.to_string(),
                    });
                }
                None => {}
            }
        }

        for name in arguments.keys() {
            if !self.params.iter().any(|p| p.name == name) {
                problems.push(ArgumentProblem::Unexpected { name: name.clone() });
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    /// Render the declared parameters as a JSON Schema object.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &self.params {
            properties.insert(
                param.name.to_string(),
                json!({
                    "type": param.kind.schema_type(),
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(Value::String(param.name.to_string()));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::String("object".to_string()));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), Value::Array(required));
        schema
    }

    /// Build the MCP tool metadata model from this descriptor.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_descriptor() -> ToolDescriptor {
        ToolDescriptor::new(
            "add",
            "Add two numbers",
            vec![
                ParamSpec::required("a", ParamKind::Integer, "First operand"),
                ParamSpec::required("b", ParamKind::Integer, "Second operand"),
            ],
            ReturnKind::Number,
        )
    }

    fn args(json: &str) -> JsonObject {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_validate_well_formed() {
        let desc = add_descriptor();
        assert!(desc.validate(&args(r#"{"a": 2, "b": 3}"#)).is_ok());
    }

    #[test]
    fn test_validate_wrong_type_names_parameter() {
        let desc = add_descriptor();
        let problems = desc.validate(&args(r#"{"a": "x", "b": 3}"#)).unwrap_err();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].param(), "a");
        assert!(problems[0].to_string().contains("expected integer"));
    }

    #[test]
    fn test_validate_missing_required() {
        let desc = add_descriptor();
        let problems = desc.validate(&args(r#"{"a": 2}"#)).unwrap_err();
        assert_eq!(
            problems,
            vec![ArgumentProblem::Missing {
                name: "b".to_string()
            }]
        );
    }

    #[test]
    fn test_validate_unexpected_argument() {
        let desc = add_descriptor();
        let problems = desc
            .validate(&args(r#"{"a": 2, "b": 3, "c": 4}"#))
            .unwrap_err();
        assert_eq!(problems[0].param(), "c");
    }

    #[test]
    fn test_validate_reports_all_problems() {
        let desc = add_descriptor();
        let problems = desc.validate(&args(r#"{"a": "x"}"#)).unwrap_err();
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_integer_rejects_fraction() {
        assert!(ParamKind::Integer.matches(&json!(7)));
        assert!(!ParamKind::Integer.matches(&json!(2.5)));
        assert!(ParamKind::Number.matches(&json!(2.5)));
    }

    #[test]
    fn test_optional_param_may_be_absent() {
        let desc = ToolDescriptor::new(
            "t",
            "d",
            vec![ParamSpec::optional("limit", ParamKind::Integer, "Limit")],
            ReturnKind::Text,
        );
        assert!(desc.validate(&args("{}")).is_ok());
    }

    #[test]
    fn test_input_schema_shape() {
        let schema = add_descriptor().input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["a"]["type"], "integer");
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 2);
    }

    #[test]
    fn test_return_kind_matches() {
        assert!(ReturnKind::Number.matches(&json!(5)));
        assert!(!ReturnKind::Number.matches(&json!("5")));
        assert!(ReturnKind::Text.matches(&json!("ok")));
        assert!(ReturnKind::Json.matches(&json!({"k": 1})));
    }
}
