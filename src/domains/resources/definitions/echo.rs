//! Echo resource with upper-case transformation.

use super::TemplatedResource;

/// `echo://{message}` - echoes the message back, upper-cased.
pub struct EchoResource;

impl TemplatedResource for EchoResource {
    const PREFIX: &'static str = "echo://";
    const URI_TEMPLATE: &'static str = "echo://{message}";
    const NAME: &'static str = "Echo";
    const DESCRIPTION: &'static str = "Echo a message back with upper-case transformation";
    const MIME_TYPE: &'static str = "text/plain";

    fn resolve(message: &str) -> String {
        format!("Resource echo: {}", message.to_uppercase())
    }
}
