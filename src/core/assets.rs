use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{AlexagonalError, Result};

/// Reads bundled text assets from a single base directory.
///
/// Nothing is cached; callers keep what they load.
#[derive(Debug, Clone)]
pub struct AssetReader {
    base: PathBuf,
}

impl AssetReader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Read the full UTF-8 contents of `file_name` inside the assets directory.
    pub async fn read(&self, file_name: &str) -> Result<String> {
        let path = self
            .resolve(file_name)
            .map_err(|source| asset_error(file_name, source))?;
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| asset_error(file_name, source))
    }

    /// Join `file_name` onto the base, refusing anything that could leave it.
    fn resolve(&self, file_name: &str) -> io::Result<PathBuf> {
        let relative = Path::new(file_name);
        let contained = !file_name.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !contained {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "asset name must be a relative path inside the assets directory",
            ));
        }
        Ok(self.base.join(relative))
    }
}

fn asset_error(file_name: &str, source: io::Error) -> AlexagonalError {
    AlexagonalError::Asset {
        file_name: file_name.to_string(),
        source,
    }
}
