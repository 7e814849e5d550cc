// ABOUTME: In-memory tab repository backed by an id-keyed map behind a reader/writer lock

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::models::Tab;
use crate::repository::{RepositoryError, TabRepository, UNASSIGNED_ID};

struct Table {
    entries: HashMap<u64, Tab>,
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

/// Process-local [`TabRepository`].
#[derive(Default)]
pub struct MemoryTabRepository {
    inner: RwLock<Table>,
}

impl MemoryTabRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TabRepository for MemoryTabRepository {
    fn save(&self, tab: &mut Tab) -> Result<(), RepositoryError> {
        let mut table = self.inner.write();
        if tab.id == UNASSIGNED_ID {
            tab.id = table.next_id;
            table.next_id += 1;
        }
        debug!("saving tab {}", tab.id);
        table.entries.insert(tab.id, tab.clone());
        Ok(())
    }

    fn update(&self, tab: &Tab) -> Result<(), RepositoryError> {
        let mut table = self.inner.write();
        if !table.entries.contains_key(&tab.id) {
            return Err(RepositoryError::NotFound {
                entity: "tab",
                id: tab.id,
            });
        }
        table.entries.insert(tab.id, tab.clone());
        Ok(())
    }

    fn delete(&self, id: u64) -> Result<(), RepositoryError> {
        let mut table = self.inner.write();
        if table.entries.remove(&id).is_none() {
            return Err(RepositoryError::NotFound { entity: "tab", id });
        }
        debug!("deleted tab {}", id);
        Ok(())
    }

    fn find_by_id(&self, id: u64) -> Result<Tab, RepositoryError> {
        let table = self.inner.read();
        table
            .entries
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound { entity: "tab", id })
    }

    fn list(&self) -> Vec<Tab> {
        let table = self.inner.read();
        table.entries.values().cloned().collect()
    }
}
