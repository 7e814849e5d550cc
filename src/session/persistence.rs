// ABOUTME: Durable session state format and backing-store access
// The session is flattened to bare entity id lists plus settings and written as JSON bytes

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::models::{Editor, EditorSettings};

/// Serialized form of the editor session.
///
/// Entities are assumed already durable in their own repositories, so only
/// their ids are recorded here, in exactly the order of the editor's
/// registries. `mode` is the integer discriminant of [`crate::models::Mode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub tab_ids: Vec<u64>,
    pub window_ids: Vec<u64>,
    pub buffer_ids: Vec<u64>,
    pub mode: u8,
    pub settings: EditorSettings,
}

impl SessionState {
    pub fn from_editor(editor: &Editor) -> Self {
        Self {
            tab_ids: editor.tabs.iter().map(|t| t.id).collect(),
            window_ids: editor.windows.iter().map(|w| w.id).collect(),
            buffer_ids: editor.buffers.iter().map(|b| b.id).collect(),
            mode: editor.mode.as_u8(),
            settings: editor.settings.clone(),
        }
    }
}

/// Raw byte-level access to the durable session state.
///
/// Reads and writes are synchronous and uninterruptible; no retries are
/// performed at this layer.
#[cfg_attr(test, mockall::automock)]
pub trait StateStore: Send + Sync {
    /// Read the persisted bytes. An absent backing file reads as empty.
    fn read(&self) -> io::Result<Vec<u8>>;
    /// Overwrite the persisted bytes.
    fn write(&self, bytes: &[u8]) -> io::Result<()>;
    /// Whether durable state is present, meaning existing and non-empty.
    fn is_present(&self) -> bool;
}

/// [`StateStore`] over a single file at a caller-supplied path.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStateStore {
    fn read(&self) -> io::Result<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, bytes)
    }

    fn is_present(&self) -> bool {
        fs::metadata(&self.path).map(|m| m.len() > 0).unwrap_or(false)
    }
}

/// Default location of the session state file, `~/.editbox/session.json`.
pub fn default_state_path() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().context("Failed to get home directory")?;
    Ok(home.join(".editbox").join("session.json"))
}
