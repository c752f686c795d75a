//! Application state shared across handlers

use std::sync::Arc;

use crate::db::PatientStore;

/// Shared application state
///
/// Built once at startup and handed to the router; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Box<dyn PatientStore>,
}

impl AppState {
    pub fn new(store: impl PatientStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: Box::new(store),
            }),
        }
    }

    pub fn store(&self) -> &dyn PatientStore {
        self.inner.store.as_ref()
    }
}
