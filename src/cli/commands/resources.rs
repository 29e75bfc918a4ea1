use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::cli::output::output_resources;
use alexagonal::core::assets::AssetReader;
use alexagonal::core::audit;
use alexagonal::core::resources::{ResourceCatalog, register_resources};

pub fn run(assets_dir: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let reader = AssetReader::new(assets_dir);
    let mut catalog = ResourceCatalog::new();
    rt.block_on(register_resources(
        &mut catalog,
        &reader,
        &audit::resource_configs(),
    ));

    output_resources(catalog.resources(), format, &mut std::io::stdout())
}
