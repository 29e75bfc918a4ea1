// resources/list and resources/read, served from the startup catalog.

use rmcp::ErrorData as McpError;
use rmcp::model::{
    AnnotateAble, RawResource, ReadResourceResult, Resource as McpResource, ResourceContents,
};
use serde_json::json;

use alexagonal::core::resources::{Resource, ResourceCatalog};

/// Describe every registered resource, in registration order.
pub fn list(catalog: &ResourceCatalog) -> Vec<McpResource> {
    catalog.resources().iter().map(describe).collect()
}

fn describe(resource: &Resource) -> McpResource {
    let mut raw = RawResource::new(resource.uri.as_str(), resource.name.as_str());
    raw.description = Some(resource.description.clone());
    raw.mime_type = Some(resource.mime_type.clone());
    raw.no_annotation()
}

/// Return the contents registered under `uri`.
pub fn read(catalog: &ResourceCatalog, uri: &str) -> Result<ReadResourceResult, McpError> {
    let resource = catalog.get(uri).ok_or_else(|| {
        McpError::resource_not_found("resource not found", Some(json!({ "uri": uri })))
    })?;

    Ok(ReadResourceResult {
        contents: vec![text_contents(resource)],
    })
}

fn text_contents(resource: &Resource) -> ResourceContents {
    let mut contents = ResourceContents::text(resource.content.as_str(), resource.uri.as_str());
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some(resource.mime_type.clone());
    }
    contents
}
