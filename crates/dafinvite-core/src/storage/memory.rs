//! In-memory storage implementation.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::document::DesignDocument;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for tests and previews.
#[derive(Default)]
pub struct MemoryStorage {
    designs: RwLock<HashMap<String, DesignDocument>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl Storage for MemoryStorage {
    fn save(&self, event_id: &str, document: &DesignDocument) -> BoxFuture<'_, StorageResult<()>> {
        let event_id = event_id.to_string();
        let document = document.clone();
        Box::pin(async move {
            let mut designs = self.designs.write().map_err(lock_error)?;
            log::debug!("Saving design for event {} ({} elements)", event_id, document.len());
            designs.insert(event_id, document);
            Ok(())
        })
    }

    fn load(&self, event_id: &str) -> BoxFuture<'_, StorageResult<DesignDocument>> {
        let event_id = event_id.to_string();
        Box::pin(async move {
            let designs = self.designs.read().map_err(lock_error)?;
            designs
                .get(&event_id)
                .cloned()
                .ok_or(StorageError::NotFound(event_id))
        })
    }

    fn delete(&self, event_id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let event_id = event_id.to_string();
        Box::pin(async move {
            let mut designs = self.designs.write().map_err(lock_error)?;
            designs.remove(&event_id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let designs = self.designs.read().map_err(lock_error)?;
            Ok(designs.keys().cloned().collect())
        })
    }

    fn exists(&self, event_id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let event_id = event_id.to_string();
        Box::pin(async move {
            let designs = self.designs.read().map_err(lock_error)?;
            Ok(designs.contains_key(&event_id))
        })
    }
}
