pub mod prompt;
pub mod resources;
