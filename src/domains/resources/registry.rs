//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here (and match its scheme in `service.rs` if templated)

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceTemplate};

use super::definitions::{EchoResource, GreetingResource, LatestNoteResource, TemplatedResource};

/// Build the metadata for a templated resource.
fn build_template<R: TemplatedResource>() -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: R::URI_TEMPLATE.to_string(),
        name: R::NAME.to_string(),
        title: None,
        description: Some(R::DESCRIPTION.to_string()),
        mime_type: Some(R::MIME_TYPE.to_string()),
    }
    .no_annotation()
}

/// All fixed resources this server exposes.
pub fn get_all_resources() -> Vec<Resource> {
    let mut latest = RawResource::new(LatestNoteResource::URI, LatestNoteResource::NAME);
    latest.description = Some(LatestNoteResource::DESCRIPTION.to_string());
    latest.mime_type = Some(LatestNoteResource::MIME_TYPE.to_string());

    vec![latest.no_annotation()]
}

/// All resource templates this server exposes.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        build_template::<GreetingResource>(),
        build_template::<EchoResource>(),
    ]
}

/// URIs of the fixed resources.
pub fn resource_uris() -> Vec<&'static str> {
    vec![LatestNoteResource::URI]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].raw.uri, "notes://latest");
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 2);

        let uri_templates: Vec<_> = templates
            .iter()
            .map(|t| t.raw.uri_template.as_str())
            .collect();
        assert!(uri_templates.contains(&"greeting://{name}"));
        assert!(uri_templates.contains(&"echo://{message}"));
    }

    #[test]
    fn test_resource_uris() {
        assert_eq!(resource_uris(), vec!["notes://latest"]);
    }
}
