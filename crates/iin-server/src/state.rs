use anyhow::Result;
use iin_persons::PersonDirectoryService;
use iin_storage::RocksDbStorage;
use std::sync::Arc;

use crate::config::Config;

/// Application state shared across all handlers
pub struct AppState {
    /// Server configuration (for future use in handlers)
    #[allow(dead_code)]
    pub config: Config,
    pub persons: Arc<PersonDirectoryService<RocksDbStorage>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let storage = Arc::new(RocksDbStorage::open(&config.database_path)?);

        Ok(Self::with_storage(config, storage))
    }

    pub fn with_storage(config: Config, storage: Arc<RocksDbStorage>) -> Self {
        AppState {
            config,
            persons: Arc::new(PersonDirectoryService::new(storage)),
        }
    }
}
