//! Append-only log file shared by every call of one wrapped target.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::{CallLogError, Result};

/// An open, append-only log file.
///
/// The handle is opened once and released when the value is dropped, or
/// explicitly through [`LogFile::close`]. Each block is written under a
/// lock and flushed before `append` returns, so blocks never interleave.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    file: Mutex<File>,
}

impl LogFile {
    /// Open `path` for appending, creating it if missing.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| CallLogError::LogOpen {
                path: path.display().to_string(),
                source: e,
            })?;

        tracing::debug!(path = %path.display(), "Call log opened");

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one block and flush it.
    pub fn append(&self, block: &str) -> Result<()> {
        // A poisoned lock still guards a usable handle.
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);

        file.write_all(block.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| write_error(&self.path, e))
    }

    /// Sync and close the handle, reporting any final I/O error.
    pub fn close(self) -> Result<()> {
        let Self { path, file } = self;
        let file = file.into_inner().unwrap_or_else(PoisonError::into_inner);

        file.sync_all().map_err(|e| write_error(&path, e))?;

        tracing::debug!(path = %path.display(), "Call log closed");
        Ok(())
    }
}

fn write_error(path: &Path, source: std::io::Error) -> CallLogError {
    CallLogError::LogWrite {
        path: path.display().to_string(),
        source,
    }
}
