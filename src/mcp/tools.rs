use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::model::{
    CallToolResult, Implementation, ListResourcesResult, PaginatedRequestParam,
    ReadResourceRequestParam, ReadResourceResult, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler, tool, tool_handler, tool_router};

use alexagonal::core::audit::{AuditTool, TOOL_NAME};
use alexagonal::core::resources::ResourceCatalog;

use super::{SERVER_NAME, format, resources};

/// The MCP surface: one tool plus the resources registered at startup.
#[derive(Clone)]
pub struct AlexagonalServer {
    audit: Arc<AuditTool>,
    catalog: Arc<ResourceCatalog>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AlexagonalServer {
    pub fn new(audit: Arc<AuditTool>, catalog: Arc<ResourceCatalog>) -> Self {
        Self {
            audit,
            catalog,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Tool for auditing the architecture of software projects, providing detailed specifications and instructions for checking conformance with the Hexagonal Architecture pattern. Use this tool to verify code structure, dependencies, and adherence to the principles of 'Ports and Adapters'."
    )]
    async fn architectural_audit_tool(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = TOOL_NAME, "tool called");
        Ok(format::call_tool_result(self.audit.respond()))
    }
}

#[tool_handler]
impl ServerHandler for AlexagonalServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Call architectural_audit_tool to get the audit instructions and the Hexagonal \
                 Architecture specification, then audit the project against them."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(resources::list(
            &self.catalog,
        )))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        tracing::debug!(uri = %request.uri, "resource read");
        resources::read(&self.catalog, &request.uri)
    }
}
