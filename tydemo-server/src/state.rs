use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tydemo_core::EventStore;
use tydemo_core::sample::{self, Task};

use crate::config::ServerConfig;

/// Shared application state
///
/// The event store and task list are the only mutable data. Each sits behind
/// its own mutex, and every handler that reads or writes one holds the lock
/// for the whole operation, so ids are never handed out twice.
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<Mutex<EventStore>>,
    pub tasks: Arc<Mutex<Vec<Task>>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State with the demo dataset, dated relative to `today`.
    pub fn new(config: ServerConfig, today: NaiveDate) -> Self {
        Self::with_store(config, EventStore::with_demo_events(today))
    }

    pub fn with_store(config: ServerConfig, store: EventStore) -> Self {
        AppState {
            events: Arc::new(Mutex::new(store)),
            tasks: Arc::new(Mutex::new(sample::tasks())),
            config: Arc::new(config),
        }
    }
}
