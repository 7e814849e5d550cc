// ABOUTME: Core data models for editor buffers, windows, tabs, and the session aggregate

pub mod buffer;
pub mod editor;
pub mod tab;
pub mod window;

pub use buffer::{Buffer, BufferError};
pub use editor::{Editor, EditorSettings, Mode};
pub use tab::Tab;
pub use window::{Cursor, Viewport, Window};
