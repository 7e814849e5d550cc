// ABOUTME: In-memory buffer repository backed by an id-keyed map behind a reader/writer lock

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::models::Buffer;
use crate::repository::{BufferRepository, RepositoryError, UNASSIGNED_ID};

struct Table {
    entries: HashMap<u64, Buffer>,
    next_id: u64,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 1,
        }
    }
}

/// Process-local [`BufferRepository`]. Each operation holds the table lock
/// for exactly its own duration; id assignment happens under the write lock
/// so concurrent saves never collide.
#[derive(Default)]
pub struct MemoryBufferRepository {
    inner: RwLock<Table>,
}

impl MemoryBufferRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BufferRepository for MemoryBufferRepository {
    fn save(&self, buffer: &mut Buffer) -> Result<(), RepositoryError> {
        let mut table = self.inner.write();
        if buffer.id == UNASSIGNED_ID {
            buffer.id = table.next_id;
            table.next_id += 1;
        }
        debug!("saving buffer {}", buffer.id);
        table.entries.insert(buffer.id, buffer.clone());
        Ok(())
    }

    fn update(&self, buffer: &Buffer) -> Result<(), RepositoryError> {
        let mut table = self.inner.write();
        if !table.entries.contains_key(&buffer.id) {
            return Err(RepositoryError::NotFound {
                entity: "buffer",
                id: buffer.id,
            });
        }
        table.entries.insert(buffer.id, buffer.clone());
        Ok(())
    }

    fn delete(&self, id: u64) -> Result<(), RepositoryError> {
        let mut table = self.inner.write();
        if table.entries.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity: "buffer",
                id,
            });
        }
        debug!("deleted buffer {}", id);
        Ok(())
    }

    fn find_by_id(&self, id: u64) -> Result<Buffer, RepositoryError> {
        let table = self.inner.read();
        table
            .entries
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound {
                entity: "buffer",
                id,
            })
    }

    fn list(&self) -> Vec<Buffer> {
        let table = self.inner.read();
        table.entries.values().cloned().collect()
    }
}
