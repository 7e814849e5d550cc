// ABOUTME: In-memory window repository with a secondary lookup by buffer id

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::models::Window;
use crate::repository::{RepositoryError, WindowRepository, UNASSIGNED_ID};

struct Table {
    entries: HashMap<u64, Window>,
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

/// Process-local [`WindowRepository`]. The buffer-id lookup scans the table;
/// window counts are small enough that no secondary index is kept.
#[derive(Default)]
pub struct MemoryWindowRepository {
    inner: RwLock<Table>,
}

impl MemoryWindowRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WindowRepository for MemoryWindowRepository {
    fn save(&self, window: &mut Window) -> Result<(), RepositoryError> {
        let mut table = self.inner.write();
        if window.id == UNASSIGNED_ID {
            window.id = table.next_id;
            table.next_id += 1;
        }
        debug!("saving window {}", window.id);
        table.entries.insert(window.id, window.clone());
        Ok(())
    }

    fn update(&self, window: &Window) -> Result<(), RepositoryError> {
        let mut table = self.inner.write();
        if !table.entries.contains_key(&window.id) {
            return Err(RepositoryError::NotFound {
                entity: "window",
                id: window.id,
            });
        }
        table.entries.insert(window.id, window.clone());
        Ok(())
    }

    fn delete(&self, id: u64) -> Result<(), RepositoryError> {
        let mut table = self.inner.write();
        if table.entries.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity: "window",
                id,
            });
        }
        debug!("deleted window {}", id);
        Ok(())
    }

    fn find_by_id(&self, id: u64) -> Result<Window, RepositoryError> {
        let table = self.inner.read();
        table
            .entries
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound {
                entity: "window",
                id,
            })
    }

    fn list(&self) -> Vec<Window> {
        let table = self.inner.read();
        table.entries.values().cloned().collect()
    }

    fn find_by_buffer_id(&self, buffer_id: u64) -> Vec<Window> {
        let table = self.inner.read();
        table
            .entries
            .values()
            .filter(|w| w.buffer_id == buffer_id)
            .cloned()
            .collect()
    }
}
