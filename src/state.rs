use std::sync::Arc;

use crate::services::{individuals::Dataset, logs::LoginLogStore};

/// Shared by every worker: the dataset is read-only, the store clones share one log.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub logins: LoginLogStore,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            logins: LoginLogStore::default(),
        }
    }
}
