// ABOUTME: Session persistence module for editor state across restarts
// Provides the durable state format, the backing-store abstraction, and the session repository

pub mod persistence;
pub mod repository;

pub use persistence::{default_state_path, FileStateStore, SessionState, StateStore};
pub use repository::{SessionError, SessionRepository};
