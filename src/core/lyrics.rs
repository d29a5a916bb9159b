use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{LyricsError, Result};

/// One or two lyric lines shown together on a single slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideUnit {
    text: String,
}

impl SlideUnit {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

impl fmt::Display for SlideUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Group the non-blank lines of `text` into consecutive pairs.
///
/// Lines are trimmed, blank lines are dropped before pairing, and an odd
/// trailing line becomes a unit of its own.
pub fn pair_lines(text: &str) -> Vec<SlideUnit> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines
        .chunks(2)
        .map(|chunk| SlideUnit {
            text: chunk.join("\n"),
        })
        .collect()
}

/// Lyrics text loaded from disk.
#[derive(Debug, Clone)]
pub struct LyricsDocument {
    path: PathBuf,
    text: String,
}

impl LyricsDocument {
    pub fn read(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LyricsError::FileNotFound {
                    path: path.to_path_buf(),
                }
                .into());
            }
            Err(e) => return Err(e.into()),
        };

        Self::from_text(path, raw)
    }

    pub fn from_text(path: &Path, raw: String) -> Result<Self> {
        let text = raw.trim().to_string();
        if text.is_empty() {
            return Err(LyricsError::Empty.into());
        }

        debug!("Loaded {} bytes of lyrics from {}", text.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Slide units for this document; never empty.
    pub fn units(&self) -> Result<Vec<SlideUnit>> {
        let units = pair_lines(&self.text);
        if units.is_empty() {
            return Err(LyricsError::Empty.into());
        }
        Ok(units)
    }
}
