// Bridge from the crate's content model to rmcp's.
//
// Items go through serde so the wire shape of `ContentItem` is the single
// source of truth; a shape rmcp rejects surfaces as an error reply.

use rmcp::model::{CallToolResult, Content};

use alexagonal::core::audit;
use alexagonal::core::content::{ContentItem, ToolResponse};
use alexagonal::error::Result;

/// Convert content items into rmcp content.
pub fn encode_contents(items: &[ContentItem]) -> Result<Vec<Content>> {
    items
        .iter()
        .map(|item| Ok(serde_json::from_value::<Content>(serde_json::to_value(item)?)?))
        .collect()
}

/// Turn a tool response into an rmcp result. Encoding failures become an
/// error-flagged text reply; nothing partial is returned.
pub fn call_tool_result(response: ToolResponse) -> CallToolResult {
    match encode_contents(&response.content) {
        Ok(content) if response.is_error => CallToolResult::error(content),
        Ok(content) => CallToolResult::success(content),
        Err(e) => {
            tracing::error!(error = %e, "could not encode audit response");
            failure_result(audit::failed(&e))
        }
    }
}

fn failure_result(response: ToolResponse) -> CallToolResult {
    let content = response
        .content
        .into_iter()
        .filter_map(|item| match item {
            ContentItem::Text { text } => Some(Content::text(text)),
            ContentItem::Resource { .. } => None,
        })
        .collect();
    CallToolResult::error(content)
}
