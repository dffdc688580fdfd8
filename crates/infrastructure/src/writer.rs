use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

/// Writes the rendered document to disk, replacing any previous file.
pub struct PrgFileWriter {
    path: PathBuf,
}

impl PrgFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn write(&self, document: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        if let Err(e) = fs::write(&self.path, document) {
            error!("Failed to write {:?}: {}", self.path, e);
            return Err(e).with_context(|| format!("Failed to write {:?}", self.path));
        }

        info!(path = ?self.path, bytes = document.len(), "💾 prg.lua written");
        Ok(())
    }
}
