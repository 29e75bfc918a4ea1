pub mod format;
pub mod resources;
pub mod tools;

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::ServiceExt;

use alexagonal::core::assets::AssetReader;
use alexagonal::core::audit::AuditTool;
use alexagonal::core::resources::ResourceCatalog;
use tools::AlexagonalServer;

pub const SERVER_NAME: &str = "alexagonal-server";

/// Start the MCP server over stdio. Blocks until the connection closes.
///
/// All assets are loaded before the transport opens, so a missing prompt
/// fails here and no request is ever accepted.
pub fn serve_stdio(assets_dir: PathBuf) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let reader = AssetReader::new(assets_dir);
        tracing::info!(assets = %reader.base().display(), "alexagonal MCP server starting");

        let mut catalog = ResourceCatalog::new();
        let audit = AuditTool::load(&mut catalog, &reader).await?;
        tracing::info!(resources = catalog.len(), "registered architectural audit tool");

        let server = AlexagonalServer::new(Arc::new(audit), Arc::new(catalog));
        let service = server.serve(rmcp::transport::stdio()).await?;
        tracing::info!("MCP server connected and ready for requests");
        service.waiting().await?;

        Ok(())
    })
}
