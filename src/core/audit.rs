//! The `architectural_audit_tool`: a fixed prompt plus the hexagonal
//! architecture reference documents, handed back verbatim.

use std::fmt::Display;

use super::assets::AssetReader;
use super::content::{ContentItem, ToolResponse};
use super::resources::{ResourceCatalog, ResourceConfig, register_resources};
use crate::error::Result;

pub const TOOL_NAME: &str = "architectural_audit_tool";

pub const TOOL_DESCRIPTION: &str = "Tool for auditing the architecture of software projects, \
providing detailed specifications and instructions for checking conformance with the Hexagonal \
Architecture pattern. Use this tool to verify code structure, dependencies, and adherence to \
the principles of 'Ports and Adapters'.";

/// Asset holding the audit instructions returned as the first content item.
pub const PROMPT_FILE: &str = "architectural-audit-prompt.md";

/// Prefix of every error reply from the tool.
pub const FAILURE_MARKER: &str = "❌";

/// Reference documents exposed as resources and embedded in every reply.
pub fn resource_configs() -> Vec<ResourceConfig> {
    vec![
        ResourceConfig::new(
            "Hexagonal Architecture Specification",
            "hexagonal-architecture-specification.md",
        )
        .with_description("Detailed specification of the Hexagonal Architecture.")
        .with_mime_type("text/markdown"),
    ]
}

/// Everything the tool needs at call time, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AuditTool {
    prompt: String,
    payloads: Vec<ContentItem>,
}

impl AuditTool {
    pub fn new(prompt: impl Into<String>, payloads: Vec<ContentItem>) -> Self {
        Self {
            prompt: prompt.into(),
            payloads,
        }
    }

    /// Load the prompt and register the reference resources.
    ///
    /// A missing prompt is fatal. A missing resource is only logged.
    pub async fn load(catalog: &mut ResourceCatalog, reader: &AssetReader) -> Result<Self> {
        let prompt = reader.read(PROMPT_FILE).await?;
        let payloads = register_resources(catalog, reader, &resource_configs()).await;
        Ok(Self::new(prompt, payloads))
    }

    pub fn payloads(&self) -> &[ContentItem] {
        &self.payloads
    }

    /// The prompt followed by every registered resource payload.
    pub fn contents(&self) -> Vec<ContentItem> {
        let mut content = Vec::with_capacity(self.payloads.len() + 1);
        content.push(ContentItem::text(self.prompt.as_str()));
        content.extend(self.payloads.iter().cloned());
        content
    }

    pub fn respond(&self) -> ToolResponse {
        ToolResponse::success(self.contents())
    }
}

/// Error reply for a failed audit. Replaces the whole response.
pub fn failed(err: &impl Display) -> ToolResponse {
    ToolResponse::error(format!(
        "{FAILURE_MARKER} Failed to run architectural audit:\n{err}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlexagonalError;
    use serde_json::json;
    use std::fs;

    fn write_assets(dir: &std::path::Path, prompt: Option<&str>, spec: Option<&str>) {
        if let Some(prompt) = prompt {
            fs::write(dir.join(PROMPT_FILE), prompt).unwrap();
        }
        if let Some(spec) = spec {
            fs::write(dir.join("hexagonal-architecture-specification.md"), spec).unwrap();
        }
    }

    #[tokio::test]
    async fn end_to_end_response() {
        let dir = tempfile::tempdir().unwrap();
        write_assets(dir.path(), Some("PROMPT"), Some("SPEC"));

        let mut catalog = ResourceCatalog::new();
        let tool = AuditTool::load(&mut catalog, &AssetReader::new(dir.path()))
            .await
            .unwrap();

        let value = serde_json::to_value(tool.respond()).unwrap();
        assert_eq!(
            value,
            json!({
                "content": [
                    {"type": "text", "text": "PROMPT"},
                    {
                        "type": "resource",
                        "resource": {
                            "uri": "resource://hexagonal-architecture-specification.md",
                            "text": "SPEC",
                            "mimeType": "text/markdown"
                        }
                    }
                ]
            })
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.resources()[0].name,
            "Hexagonal Architecture Specification"
        );
    }

    #[tokio::test]
    async fn missing_specification_leaves_prompt_only() {
        let dir = tempfile::tempdir().unwrap();
        write_assets(dir.path(), Some("PROMPT"), None);

        let mut catalog = ResourceCatalog::new();
        let tool = AuditTool::load(&mut catalog, &AssetReader::new(dir.path()))
            .await
            .unwrap();

        let response = tool.respond();
        assert!(!response.is_error);
        assert_eq!(response.content, vec![ContentItem::text("PROMPT")]);
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn missing_prompt_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_assets(dir.path(), None, Some("SPEC"));

        let mut catalog = ResourceCatalog::new();
        let err = AuditTool::load(&mut catalog, &AssetReader::new(dir.path()))
            .await
            .unwrap_err();
        assert!(matches!(err, AlexagonalError::Asset { ref file_name, .. } if file_name == PROMPT_FILE));
    }

    #[test]
    fn contents_start_with_prompt() {
        let tool = AuditTool::new(
            "Audit this.",
            vec![
                ContentItem::resource("resource://a.md", "a", "text/markdown"),
                ContentItem::resource("resource://b.md", "b", "text/plain"),
            ],
        );

        let content = tool.contents();
        assert_eq!(content.len(), 3);
        assert_eq!(content[0], ContentItem::text("Audit this."));
        assert_eq!(&content[1..], tool.payloads());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let tool = AuditTool::new("P", vec![ContentItem::resource("resource://a", "a", "text/plain")]);
        assert_eq!(tool.respond(), tool.respond());
    }

    #[test]
    fn failure_is_flagged_text_only() {
        let err = AlexagonalError::Config("injected breakage".into());
        let response = failed(&err);

        assert!(response.is_error);
        assert_eq!(response.content.len(), 1);
        match &response.content[0] {
            ContentItem::Text { text } => {
                assert!(text.starts_with(FAILURE_MARKER));
                assert!(text.contains("injected breakage"));
            }
            other => panic!("expected text, got {other:?}"),
        }

        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["isError"], json!(true));
    }

    #[test]
    fn static_resource_list() {
        let configs = resource_configs();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].file_name, "hexagonal-architecture-specification.md");
        assert_eq!(configs[0].mime_type.as_deref(), Some("text/markdown"));
    }
}
