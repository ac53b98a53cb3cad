use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// One reference file held fully in memory.
///
/// Construction enforces strict UTF-8; the byte view and the text view are
/// therefore always the same bytes. Nothing is trimmed or normalized here:
/// the validator wants to see the file exactly as it is on disk, BOM and
/// stray carriage returns included.
#[derive(Debug, Clone)]
pub struct RawFile {
    pub path: PathBuf,
    text: String,
}

impl RawFile {
    /// Decode raw bytes into a file, failing on invalid UTF-8.
    pub fn from_bytes(path: PathBuf, bytes: Vec<u8>) -> Result<Self> {
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self { path, text }),
            Err(error) => Err(IngestError::Utf8 {
                path,
                offset: error.utf8_error().valid_up_to(),
            }),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Read a file fully into memory.
pub fn read_raw_file(path: &Path) -> Result<RawFile> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), size = bytes.len(), "loaded raw file");
    RawFile::from_bytes(path.to_path_buf(), bytes)
}
