//! Persistent slot backends
//!
//! The post collection lives in a single key-value slot: one serialized
//! document, read in full at startup and rewritten in full on every
//! mutation. [`StorageSlot`] is the seam; [`FileSlot`] is the on-disk
//! backend and [`MemorySlot`] the in-process one used by tests and
//! embedders.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Result, StorageError};

/// A single string-valued persistence slot
pub trait StorageSlot: Send {
    /// Read the slot. `None` means the slot has never been written.
    fn load(&self) -> Result<Option<String>>;

    /// Overwrite the slot with `payload`
    fn store(&self, payload: &str) -> Result<()>;
}

/// Slot backed by a file on disk
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot at `path`. `~` is expanded; parent directories are
    /// created on first write.
    pub fn new(path: impl AsRef<str>) -> Self {
        let expanded = shellexpand::tilde(path.as_ref()).to_string();
        Self {
            path: PathBuf::from(expanded),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e).into()),
        }
    }

    fn store(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StorageError::Io)?;
        }
        fs::write(&self.path, payload).map_err(StorageError::Io)?;
        Ok(())
    }
}

/// In-memory slot, available to all builds so integration tests and
/// embedders can run the store without touching the filesystem
#[derive(Default)]
pub struct MemorySlot {
    cell: Mutex<Option<String>>,
}

impl MemorySlot {
    /// An empty (never-written) slot
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-populated with `payload`
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            cell: Mutex::new(Some(payload.into())),
        }
    }

    /// Current slot contents, for assertions
    pub fn snapshot(&self) -> Option<String> {
        self.cell.lock().unwrap().clone()
    }
}

impl StorageSlot for MemorySlot {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.cell.lock().unwrap().clone())
    }

    fn store(&self, payload: &str) -> Result<()> {
        *self.cell.lock().unwrap() = Some(payload.to_string());
        Ok(())
    }
}
