//! Personalized greeting resource.

use super::TemplatedResource;

/// `greeting://{name}` - greets the named caller.
pub struct GreetingResource;

impl TemplatedResource for GreetingResource {
    const PREFIX: &'static str = "greeting://";
    const URI_TEMPLATE: &'static str = "greeting://{name}";
    const NAME: &'static str = "Personalized Greeting";
    const DESCRIPTION: &'static str = "Get a personalized greeting for a name";
    const MIME_TYPE: &'static str = "text/plain";

    fn resolve(name: &str) -> String {
        format!("Hello, {}!", name)
    }
}
