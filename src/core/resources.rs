use futures::future::join_all;
use serde::{Deserialize, Serialize};

use super::assets::AssetReader;
use super::content::ContentItem;
use crate::error::Result;

/// Scheme prefixed to an asset's file name to form its resource uri.
pub const URI_SCHEME: &str = "resource://";

pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Describes a resource before its backing asset is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub name: String,
    pub file_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl ResourceConfig {
    pub fn new(name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            description: None,
            mime_type: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Stable uri for an asset. Depends on nothing but the file name.
pub fn resource_uri(file_name: &str) -> String {
    format!("{URI_SCHEME}{file_name}")
}

/// A loaded resource, immutable for the life of the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub name: String,
    pub uri: String,
    pub description: String,
    pub content: String,
    pub mime_type: String,
}

impl Resource {
    pub fn from_config(config: &ResourceConfig, content: String) -> Self {
        Self {
            name: config.name.clone(),
            uri: resource_uri(&config.file_name),
            description: config.description.clone().unwrap_or_default(),
            content,
            mime_type: config
                .mime_type
                .clone()
                .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
        }
    }

    /// This resource as an inline tool-response item.
    pub fn payload(&self) -> ContentItem {
        ContentItem::resource(&self.uri, &self.content, &self.mime_type)
    }
}

/// Resources registered with the server, in registration order.
///
/// There is no de-duplication and no removal. Registering the same uri twice
/// keeps both entries; lookups return the first.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    resources: Vec<Resource>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn get(&self, uri: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.uri == uri)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// Load one resource's backing asset.
pub async fn load_resource(reader: &AssetReader, config: &ResourceConfig) -> Result<Resource> {
    let content = reader.read(&config.file_name).await?;
    Ok(Resource::from_config(config, content))
}

/// Load every config concurrently. Results keep config order.
pub async fn load_resources(
    reader: &AssetReader,
    configs: &[ResourceConfig],
) -> Vec<Result<Resource>> {
    join_all(configs.iter().map(|config| load_resource(reader, config))).await
}

/// Load and register resources, returning their payloads for tool replies.
///
/// A resource whose asset cannot be loaded is logged and left out; the rest of
/// the batch is unaffected.
pub async fn register_resources(
    catalog: &mut ResourceCatalog,
    reader: &AssetReader,
    configs: &[ResourceConfig],
) -> Vec<ContentItem> {
    let mut payloads = Vec::with_capacity(configs.len());

    for (config, loaded) in configs.iter().zip(load_resources(reader, configs).await) {
        match loaded {
            Ok(resource) => {
                tracing::debug!(name = %resource.name, uri = %resource.uri, "registered resource");
                payloads.push(resource.payload());
                catalog.register(resource);
            }
            Err(e) => {
                tracing::warn!(name = %config.name, error = %e, "skipping resource");
            }
        }
    }

    payloads
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn assets_with(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        dir
    }

    #[test]
    fn uri_depends_only_on_file_name() {
        let a = Resource::from_config(&ResourceConfig::new("A", "doc.md"), "one".into());
        let b = Resource::from_config(
            &ResourceConfig::new("B", "doc.md").with_mime_type("text/markdown"),
            "two".into(),
        );
        assert_eq!(a.uri, "resource://doc.md");
        assert_eq!(a.uri, b.uri);
    }

    #[test]
    fn defaults_fill_missing_metadata() {
        let resource = Resource::from_config(&ResourceConfig::new("Notes", "notes.txt"), "n".into());
        assert_eq!(resource.description, "");
        assert_eq!(resource.mime_type, "text/plain");
    }

    #[tokio::test]
    async fn registers_one_payload_per_config() {
        let dir = assets_with(&[("a.md", "alpha"), ("b.txt", "beta")]);
        let reader = AssetReader::new(dir.path());
        let configs = vec![
            ResourceConfig::new("Alpha", "a.md")
                .with_description("first")
                .with_mime_type("text/markdown"),
            ResourceConfig::new("Beta", "b.txt"),
        ];

        let mut catalog = ResourceCatalog::new();
        let payloads = register_resources(&mut catalog, &reader, &configs).await;

        assert_eq!(
            payloads,
            vec![
                ContentItem::resource("resource://a.md", "alpha", "text/markdown"),
                ContentItem::resource("resource://b.txt", "beta", "text/plain"),
            ]
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resources()[0].description, "first");
        assert_eq!(catalog.get("resource://b.txt").unwrap().name, "Beta");
    }

    #[tokio::test]
    async fn missing_asset_is_dropped() {
        let dir = assets_with(&[("a.md", "alpha"), ("c.md", "gamma")]);
        let reader = AssetReader::new(dir.path());
        let configs = vec![
            ResourceConfig::new("Alpha", "a.md"),
            ResourceConfig::new("Missing", "missing.md"),
            ResourceConfig::new("Gamma", "c.md"),
        ];

        let mut catalog = ResourceCatalog::new();
        let payloads = register_resources(&mut catalog, &reader, &configs).await;

        assert_eq!(payloads.len(), configs.len() - 1);
        assert_eq!(
            payloads[1],
            ContentItem::resource("resource://c.md", "gamma", "text/plain")
        );
        assert!(catalog.get("resource://missing.md").is_none());
    }

    #[tokio::test]
    async fn load_resources_keeps_order_and_failures() {
        let dir = assets_with(&[("a.md", "alpha")]);
        let reader = AssetReader::new(dir.path());
        let configs = vec![
            ResourceConfig::new("Missing", "missing.md"),
            ResourceConfig::new("Alpha", "a.md"),
        ];

        let loaded = load_resources(&reader, &configs).await;
        assert!(loaded[0].is_err());
        assert_eq!(loaded[1].as_ref().unwrap().content, "alpha");
    }

    #[tokio::test]
    async fn registering_twice_doubles_catalog() {
        let dir = assets_with(&[("a.md", "alpha"), ("b.md", "beta")]);
        let reader = AssetReader::new(dir.path());
        let configs = vec![
            ResourceConfig::new("Alpha", "a.md"),
            ResourceConfig::new("Beta", "b.md"),
        ];

        let mut catalog = ResourceCatalog::new();
        let first = register_resources(&mut catalog, &reader, &configs).await;
        let second = register_resources(&mut catalog, &reader, &configs).await;

        assert_eq!(first, second);
        assert_eq!(catalog.len(), 4);
    }

    #[tokio::test]
    async fn duplicate_configs_register_independently() {
        let dir = assets_with(&[("a.md", "alpha")]);
        let reader = AssetReader::new(dir.path());
        let configs = vec![
            ResourceConfig::new("First", "a.md"),
            ResourceConfig::new("Second", "a.md"),
        ];

        let mut catalog = ResourceCatalog::new();
        let payloads = register_resources(&mut catalog, &reader, &configs).await;

        assert_eq!(payloads.len(), 2);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("resource://a.md").unwrap().name, "First");
    }

    #[tokio::test]
    async fn empty_config_list_registers_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let reader = AssetReader::new(dir.path());
        let mut catalog = ResourceCatalog::new();

        assert!(register_resources(&mut catalog, &reader, &[]).await.is_empty());
        assert!(catalog.is_empty());
    }
}
