use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Server settings read from `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlexagonalConfig {
    /// Directory holding the prompt and resource assets.
    pub assets_dir: Option<PathBuf>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}
