//! Shared state handed to every HTTP handler

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::{ConfigStore, Configuration};

#[derive(Clone)]
pub struct AppState {
    store: ConfigStore,
    started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: ConfigStore) -> Self {
        Self {
            store,
            started_at: Utc::now(),
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn config(&self) -> Arc<Configuration> {
        self.store.config()
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
