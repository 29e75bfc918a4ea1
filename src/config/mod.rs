pub mod types;

use std::path::{Path, PathBuf};

use crate::error::{AlexagonalError, Result};
use types::AlexagonalConfig;

/// Filter applied when neither `RUST_LOG` nor the config file sets one.
pub const DEFAULT_LOG_FILTER: &str = "alexagonal=info";

/// Load config from the given path, or from the XDG path when none is given.
///
/// A missing file at the XDG path yields defaults. A missing file that was asked
/// for explicitly is an error, as is malformed TOML anywhere.
pub fn load_config(explicit: Option<&Path>) -> Result<AlexagonalConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => config_path(),
    };

    match std::fs::read_to_string(&path) {
        Ok(text) => parse_config(&text)
            .map_err(|e| AlexagonalError::Config(format!("{}: {}", path.display(), e))),
        Err(e) if explicit.is_none() && e.kind() == std::io::ErrorKind::NotFound => {
            Ok(AlexagonalConfig::default())
        }
        Err(e) => Err(AlexagonalError::Config(format!(
            "cannot read {}: {}",
            path.display(),
            e
        ))),
    }
}

fn parse_config(text: &str) -> std::result::Result<AlexagonalConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Return XDG config dir (~/.config/alexagonal/)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("alexagonal")
}

/// Return the default config file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Pick the assets directory: command-line flag, then config, then auto-located.
pub fn resolve_assets_dir(flag: Option<&Path>, config: &AlexagonalConfig) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.assets_dir.clone())
        .unwrap_or_else(default_assets_dir)
}

/// Locate the bundled `assets/` directory.
///
/// Looks beside the executable, then beside its parent directory, then in the
/// crate root. Falls back to the crate root even if it does not exist.
pub fn default_assets_dir() -> PathBuf {
    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");

    let mut candidates = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join("assets"));
        if let Some(parent) = exe_dir.parent() {
            candidates.push(parent.join("assets"));
        }
    }
    candidates.push(bundled.clone());

    candidates
        .into_iter()
        .find(|dir| dir.is_dir())
        .unwrap_or(bundled)
}
