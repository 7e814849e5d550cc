// ABOUTME: File-backed session repository composing the three entity repositories
// Flattens the live session to id lists on save and rehydrates them on load

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Editor, Mode};
use crate::repository::{BufferRepository, RepositoryError, TabRepository, WindowRepository};
use crate::session::persistence::{SessionState, StateStore};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed session state: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Failed to rehydrate session: {0}")]
    Rehydrate(#[from] RepositoryError),

    #[error("Unknown editor mode {0}")]
    UnknownMode(u8),

    #[error("session state does not exist, cannot update")]
    DoesNotExist,
}

/// Owner of the single live [`Editor`] session and its durable form.
///
/// Loading resolves every persisted entity id through the owning repository;
/// a single failed lookup fails the whole load, so a session is either fully
/// rehydrated or not produced at all. The session lock is independent of the
/// entity repositories' locks, so a load racing a concurrent entity mutation
/// observes a possibly-torn snapshot of entity state; that is the documented
/// consistency level.
pub struct SessionRepository {
    store: Box<dyn StateStore>,
    tab_repo: Arc<dyn TabRepository>,
    window_repo: Arc<dyn WindowRepository>,
    buffer_repo: Arc<dyn BufferRepository>,
    current: RwLock<Option<Editor>>,
}

impl SessionRepository {
    /// Construct the repository and perform the initial load: absent or
    /// empty durable state yields a fresh default session, anything else is
    /// decoded and rehydrated. Load failures fail construction.
    pub fn new(
        store: Box<dyn StateStore>,
        tab_repo: Arc<dyn TabRepository>,
        window_repo: Arc<dyn WindowRepository>,
        buffer_repo: Arc<dyn BufferRepository>,
    ) -> Result<Self, SessionError> {
        let repo = Self {
            store,
            tab_repo,
            window_repo,
            buffer_repo,
            current: RwLock::new(None),
        };
        repo.get()?;
        Ok(repo)
    }

    /// Current session, reloaded from the backing store. An absent or empty
    /// store yields a freshly defaulted session; any other failure fails the
    /// whole load and leaves the previously adopted session in place.
    pub fn get(&self) -> Result<Editor, SessionError> {
        let mut current = self.current.write();

        let bytes = self.store.read()?;
        if bytes.is_empty() {
            debug!("no persisted session state, starting fresh");
            let editor = Editor::new();
            *current = Some(editor.clone());
            return Ok(editor);
        }

        let state: SessionState = serde_json::from_slice(&bytes)?;
        let editor = self.rehydrate(&state)?;
        *current = Some(editor.clone());
        Ok(editor)
    }

    /// Persist the given session unconditionally, adopting it as the current
    /// in-memory session if none was set yet.
    pub fn save(&self, editor: &Editor) -> Result<(), SessionError> {
        let mut current = self.current.write();
        if current.is_none() {
            *current = Some(editor.clone());
        }
        self.write_state(editor)
    }

    /// Persist like [`SessionRepository::save`], but fail when no durable
    /// state exists yet; update requires a prior save.
    pub fn update(&self, editor: &Editor) -> Result<(), SessionError> {
        let _current = self.current.write();
        if !self.store.is_present() {
            return Err(SessionError::DoesNotExist);
        }
        self.write_state(editor)
    }

    fn rehydrate(&self, state: &SessionState) -> Result<Editor, SessionError> {
        let mode = Mode::from_u8(state.mode).ok_or(SessionError::UnknownMode(state.mode))?;

        let mut editor = Editor::new();
        editor.mode = mode;
        editor.settings = state.settings.clone();

        for &tab_id in &state.tab_ids {
            editor.tabs.push(self.tab_repo.find_by_id(tab_id)?);
        }
        for &window_id in &state.window_ids {
            editor.windows.push(self.window_repo.find_by_id(window_id)?);
        }
        for &buffer_id in &state.buffer_ids {
            editor.buffers.push(self.buffer_repo.find_by_id(buffer_id)?);
        }

        info!(
            "restored session with {} tabs, {} windows, {} buffers",
            editor.tabs.len(),
            editor.windows.len(),
            editor.buffers.len()
        );
        Ok(editor)
    }

    fn write_state(&self, editor: &Editor) -> Result<(), SessionError> {
        let state = SessionState::from_editor(editor);
        let bytes = serde_json::to_vec(&state)?;
        self.store.write(&bytes)?;
        debug!("persisted session state ({} bytes)", bytes.len());
        Ok(())
    }
}
