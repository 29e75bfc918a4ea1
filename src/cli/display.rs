use owo_colors::OwoColorize;

use alexagonal::core::resources::Resource;

/// Render a resource as a one-line summary for list output.
pub fn render_resource_line(resource: &Resource) -> String {
    format!(
        "{}  {}  {}",
        resource.name.bold(),
        resource.uri.cyan(),
        resource.mime_type.dimmed(),
    )
}
