//! PNG output with explicit directory configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::DynamicImage;

use crate::symbology::Symbology;

/// Where generated files land. An empty directory means the invocation
/// directory, so paths print without a leading `./`.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl OutputConfig {
    /// Full path for one symbology's output file, prefix included.
    pub fn target_path(&self, symbology: Symbology, base_filename: &str) -> PathBuf {
        self.dir
            .join(format!("{}{}", symbology.file_prefix(), base_filename))
    }
}

/// Write the rendered raster as PNG, overwriting any existing file.
pub fn write_png(image: &DynamicImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output directory {}", parent.display()))?;
        }
    }
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}
