//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::store::{DocumentStore, StoreError};

/// Application state: the document store handle built once at startup.
///
/// The handle is optional. Without one the API still serves requests, but every store
/// operation fails with [`StoreError::Unavailable`].
#[derive(Clone, Default)]
pub struct AppState {
    store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store: Some(store) }
    }

    pub fn with_store(store: impl DocumentStore + 'static) -> Self {
        Self::new(Arc::new(store))
    }

    /// Whether a store handle was initialized.
    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Result<&dyn DocumentStore, StoreError> {
        self.store.as_deref().ok_or(StoreError::Unavailable)
    }
}
