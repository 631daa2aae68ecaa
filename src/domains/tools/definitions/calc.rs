//! Calculator tools: add, subtract, multiply, divide.
//!
//! Pure in-process arithmetic over 64-bit integers. Overflow and division by
//! zero are handler failures, not panics.

use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domains::tools::descriptor::{ParamKind, ParamSpec, ReturnKind, ToolDescriptor};
use crate::domains::tools::handler::{ToolHandler, parse_params};

/// Operands shared by all four operations.
#[derive(Debug, Clone, Deserialize)]
pub struct BinaryOpParams {
    pub a: i64,
    pub b: i64,
}

fn binary_op_descriptor(name: &'static str, description: &'static str) -> ToolDescriptor {
    ToolDescriptor::new(
        name,
        description,
        vec![
            ParamSpec::required("a", ParamKind::Integer, "First operand"),
            ParamSpec::required("b", ParamKind::Integer, "Second operand"),
        ],
        ReturnKind::Number,
    )
}

/// Addition tool.
pub struct AddTool;

#[async_trait::async_trait]
impl ToolHandler for AddTool {
    fn descriptor(&self) -> ToolDescriptor {
        binary_op_descriptor("add", "Add two numbers")
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: BinaryOpParams = parse_params(arguments)?;
        let sum = params
            .a
            .checked_add(params.b)
            .ok_or_else(|| anyhow::anyhow!("integer overflow"))?;
        Ok(json!(sum))
    }
}

/// Subtraction tool.
pub struct SubtractTool;

#[async_trait::async_trait]
impl ToolHandler for SubtractTool {
    fn descriptor(&self) -> ToolDescriptor {
        binary_op_descriptor("subtract", "Subtract the second number from the first")
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: BinaryOpParams = parse_params(arguments)?;
        let difference = params
            .a
            .checked_sub(params.b)
            .ok_or_else(|| anyhow::anyhow!("integer overflow"))?;
        Ok(json!(difference))
    }
}

/// Multiplication tool.
pub struct MultiplyTool;

#[async_trait::async_trait]
impl ToolHandler for MultiplyTool {
    fn descriptor(&self) -> ToolDescriptor {
        binary_op_descriptor("multiply", "Multiply two numbers")
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: BinaryOpParams = parse_params(arguments)?;
        let product = params
            .a
            .checked_mul(params.b)
            .ok_or_else(|| anyhow::anyhow!("integer overflow"))?;
        Ok(json!(product))
    }
}

/// Division tool. Returns a float; division by zero fails.
pub struct DivideTool;

#[async_trait::async_trait]
impl ToolHandler for DivideTool {
    fn descriptor(&self) -> ToolDescriptor {
        binary_op_descriptor(
            "divide",
            "Divide the first number by the second (returns a float)",
        )
    }

    async fn call(&self, arguments: JsonObject) -> anyhow::Result<Value> {
        let params: BinaryOpParams = parse_params(arguments)?;
        if params.b == 0 {
            anyhow::bail!("Division by zero is not allowed");
        }
        Ok(json!(params.a as f64 / params.b as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(json: &str) -> JsonObject {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn test_add() {
        let result = AddTool.call(args(r#"{"a": 2, "b": 3}"#)).await.unwrap();
        assert_eq!(result, json!(5));
    }

    #[tokio::test]
    async fn test_subtract_negative_result() {
        let result = SubtractTool
            .call(args(r#"{"a": 3, "b": 10}"#))
            .await
            .unwrap();
        assert_eq!(result, json!(-7));
    }

    #[tokio::test]
    async fn test_multiply() {
        let result = MultiplyTool
            .call(args(r#"{"a": -4, "b": 6}"#))
            .await
            .unwrap();
        assert_eq!(result, json!(-24));
    }

    #[tokio::test]
    async fn test_divide_returns_float() {
        let result = DivideTool.call(args(r#"{"a": 7, "b": 2}"#)).await.unwrap();
        assert_eq!(result, json!(3.5));
    }

    #[tokio::test]
    async fn test_divide_by_zero_fails() {
        let err = DivideTool
            .call(args(r#"{"a": 1, "b": 0}"#))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Division by zero"));
    }

    #[tokio::test]
    async fn test_add_overflow_fails() {
        let err = AddTool
            .call(args(&format!(r#"{{"a": {}, "b": 1}}"#, i64::MAX)))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn test_descriptor_declares_integers() {
        let desc = AddTool.descriptor();
        assert_eq!(desc.name, "add");
        assert_eq!(desc.params.len(), 2);
        assert_eq!(desc.returns, ReturnKind::Number);
    }
}
