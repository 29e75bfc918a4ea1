use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use alexagonal::core::resources::Resource;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSummary<'a> {
    name: &'a str,
    uri: &'a str,
    description: &'a str,
    mime_type: &'a str,
    bytes: usize,
}

impl<'a> From<&'a Resource> for ResourceSummary<'a> {
    fn from(resource: &'a Resource) -> Self {
        Self {
            name: &resource.name,
            uri: &resource.uri,
            description: &resource.description,
            mime_type: &resource.mime_type,
            bytes: resource.content.len(),
        }
    }
}

/// Write resources in the requested output format.
pub fn output_resources(
    resources: &[Resource],
    format: OutputFormat,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let summaries: Vec<ResourceSummary> = resources.iter().map(Into::into).collect();
            serde_json::to_writer_pretty(&mut *writer, &summaries)?;
            writeln!(writer)?;
        }
        OutputFormat::Human => {
            if resources.is_empty() {
                writeln!(writer, "no resources loaded")?;
            }
            for resource in resources {
                writeln!(writer, "{}", super::display::render_resource_line(resource))?;
            }
        }
    }
    Ok(())
}
