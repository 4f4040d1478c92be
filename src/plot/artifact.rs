//! Content-addressed artifact files.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::{DashboardError, Result};

/// A persisted artifact: its identifier and where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    /// File name, `{kind}-{xxh3:016x}.{ext}`.
    pub id: String,
    pub path: PathBuf,
}

/// Directory of artifacts named by the hash of their content.
///
/// Identical content always maps to the same file, and different content
/// never overwrites an existing artifact.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `content` as `{kind}-{hash}.{extension}` and return its reference.
    ///
    /// The write is skipped when the file already exists.
    pub fn save(&self, kind: &str, extension: &str, content: &[u8]) -> Result<ArtifactRef> {
        let id = format!("{}-{:016x}.{}", kind, xxh3_64(content), extension);
        let path = self.dir.join(&id);

        if path.is_file() {
            debug!(artifact = %id, "artifact already present");
        } else {
            fs::create_dir_all(&self.dir)
                .map_err(|e| DashboardError::data_access(&self.dir, e))?;
            fs::write(&path, content).map_err(|e| DashboardError::data_access(&path, e))?;
            debug!(artifact = %id, bytes = content.len(), "wrote artifact");
        }

        Ok(ArtifactRef { id, path })
    }
}

/// Read an artifact and encode it as a base64 `data:` URI.
pub fn embed_data_uri(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| DashboardError::data_access(path, e))?;
    let mime = match path.extension().and_then(|e| e.to_str()) {
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}
