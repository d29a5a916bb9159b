use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::presentation::PublishedPresentation;
use crate::error::{FileSystemError, Result};

/// Terminal artifact of a run: share link and slide count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub link: String,
    pub slide_count: usize,
}

impl ResultRecord {
    pub fn render(&self) -> String {
        format!("{}\n{} slides\n", self.link, self.slide_count)
    }

    /// Overwrites `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).map_err(|source| FileSystemError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Result written to {}", path.display());
        Ok(())
    }
}

impl From<&PublishedPresentation> for ResultRecord {
    fn from(published: &PublishedPresentation) -> Self {
        Self {
            link: published.url.clone(),
            slide_count: published.slide_count,
        }
    }
}
