// ABOUTME: Buffer data model holding one document's text content and modified state

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("line number {0} out of range")]
    LineOutOfRange(usize),
}

/// In-memory representation of one document's text.
///
/// Content is a flat character sequence; the rendering layer extracts lines
/// through [`Buffer::line`]. A buffer starts with id 0 until its repository
/// assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    pub id: u64,
    pub content: String,
    /// Path of the backing document; empty when the buffer was never saved.
    pub file_path: String,
    pub modified: bool,
}

impl Buffer {
    pub fn new(content: String, file_path: String) -> Self {
        Self {
            id: 0,
            content,
            file_path,
            modified: false,
        }
    }

    /// Zero-indexed line of the content, split on `'\n'`. Empty content has
    /// exactly one empty line.
    pub fn line(&self, line_num: usize) -> Result<&str, BufferError> {
        self.content
            .split('\n')
            .nth(line_num)
            .ok_or(BufferError::LineOutOfRange(line_num))
    }

    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Replace the content, marking the buffer as modified until the next
    /// [`Buffer::mark_saved`].
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.modified = true;
    }

    /// Clear the modified flag after the document has been written to disk.
    /// The write itself is the file I/O collaborator's job, not this crate's.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }
}
