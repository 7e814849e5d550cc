// ABOUTME: Repository traits for identifier-keyed entity storage
// One concurrency-safe store per entity kind with auto-assigned ids

pub mod buffer;
pub mod tab;
pub mod window;

pub use buffer::MemoryBufferRepository;
pub use tab::MemoryTabRepository;
pub use window::MemoryWindowRepository;

use thiserror::Error;

use crate::models::{Buffer, Tab, Window};

/// Identifier given to freshly constructed entities; repositories replace it
/// with a real id on first save.
pub const UNASSIGNED_ID: u64 = 0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: u64 },
}

/// Store for [`Buffer`] entities.
///
/// `save` assigns the next monotonically increasing id when the entity is
/// still unassigned (id 0) and writes it back into the caller's entity,
/// otherwise it upserts under the existing id. `update` and `delete` fail
/// with [`RepositoryError::NotFound`] for absent ids; neither cascades to
/// entities referencing the removed one.
#[cfg_attr(test, mockall::automock)]
pub trait BufferRepository: Send + Sync {
    fn save(&self, buffer: &mut Buffer) -> Result<(), RepositoryError>;
    fn update(&self, buffer: &Buffer) -> Result<(), RepositoryError>;
    fn delete(&self, id: u64) -> Result<(), RepositoryError>;
    fn find_by_id(&self, id: u64) -> Result<Buffer, RepositoryError>;
    /// All stored buffers, in unspecified order.
    fn list(&self) -> Vec<Buffer>;
}

/// Store for [`Window`] entities; same contract as [`BufferRepository`].
#[cfg_attr(test, mockall::automock)]
pub trait WindowRepository: Send + Sync {
    fn save(&self, window: &mut Window) -> Result<(), RepositoryError>;
    fn update(&self, window: &Window) -> Result<(), RepositoryError>;
    fn delete(&self, id: u64) -> Result<(), RepositoryError>;
    fn find_by_id(&self, id: u64) -> Result<Window, RepositoryError>;
    fn list(&self) -> Vec<Window>;
    /// All windows displaying the given buffer; empty when none do.
    fn find_by_buffer_id(&self, buffer_id: u64) -> Vec<Window>;
}

/// Store for [`Tab`] entities; same contract as [`BufferRepository`].
#[cfg_attr(test, mockall::automock)]
pub trait TabRepository: Send + Sync {
    fn save(&self, tab: &mut Tab) -> Result<(), RepositoryError>;
    fn update(&self, tab: &Tab) -> Result<(), RepositoryError>;
    fn delete(&self, id: u64) -> Result<(), RepositoryError>;
    fn find_by_id(&self, id: u64) -> Result<Tab, RepositoryError>;
    fn list(&self) -> Vec<Tab>;
}
