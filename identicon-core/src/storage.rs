//! Storage Collaborator
//!
//! Writes go to a temporary file in the target directory and are renamed
//! into place, so a failed write never leaves a partial file behind.

use std::io::{self, Write};
use std::path::PathBuf;

use log::{error, info};
use tempfile::NamedTempFile;

use crate::pipeline::PipelineError;

pub trait Storage {
    /// Write `bytes` under `name`, replacing any existing file.
    fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, PipelineError>;
}

/// Filesystem storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

/// Mode requested for written files; the process umask still applies.
#[cfg(unix)]
pub const FILE_MODE: u32 = 0o666;

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Temp files default to 0600; the renamed PNG must stay readable.
    fn temp_file(&self) -> io::Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(Permissions::from_mode(FILE_MODE));
        }
        builder.tempfile_in(&self.root)
    }
}

impl Default for FsStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for FsStorage {
    fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, PipelineError> {
        let path = self.root.join(name);
        let result = self
            .temp_file()
            .and_then(|mut tmp| {
                tmp.write_all(bytes)?;
                tmp.as_file().sync_all()?;
                Ok(tmp)
            })
            .and_then(|tmp| tmp.persist(&path).map_err(|e| e.error));

        match result {
            Ok(_) => {
                info!("wrote {} bytes to {}", bytes.len(), path.display());
                Ok(path)
            }
            Err(e) => {
                error!("failed to write {}: {}", path.display(), e);
                Err(PipelineError::Storage { path, source: e })
            }
        }
    }
}
