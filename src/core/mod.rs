pub mod assets;
pub mod audit;
pub mod content;
pub mod resources;
