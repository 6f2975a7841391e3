//! Application state for the comparator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers: the loaded configuration and the in-memory
//! store of saved scenarios.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::error::{ComparatorError, ComparatorResult};
use crate::models::Scenario;

/// A saved scenario together with its store id.
#[derive(Debug, Clone)]
pub struct StoredScenario {
    /// Store id, unique for the lifetime of the store.
    pub id: u64,
    /// The saved scenario.
    pub scenario: Scenario,
}

/// In-memory list of saved scenarios, in insertion order.
///
/// Ids are handed out from a counter and never reused, so deleting one
/// scenario does not shift the ids of the others.
#[derive(Debug, Default)]
pub struct ScenarioStore {
    next_id: u64,
    entries: Vec<StoredScenario>,
}

impl ScenarioStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a scenario and returns its id.
    pub fn insert(&mut self, scenario: Scenario) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(StoredScenario { id, scenario });
        id
    }

    /// Looks up a saved scenario.
    pub fn get(&self, id: u64) -> ComparatorResult<&Scenario> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.scenario)
            .ok_or(ComparatorError::ScenarioNotFound { id })
    }

    /// Returns all saved scenarios in insertion order.
    pub fn list(&self) -> &[StoredScenario] {
        &self.entries
    }

    /// Removes every scenario whose id is in `ids` and returns how many were
    /// removed. Unknown ids are ignored.
    pub fn remove(&mut self, ids: &[u64]) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !ids.contains(&entry.id));
        before - self.entries.len()
    }

    /// Number of saved scenarios.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared application state.
///
/// Cheap to clone; every clone shares the same configuration and store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded application configuration.
    config: Arc<ConfigLoader>,
    /// Saved scenarios.
    store: Arc<RwLock<ScenarioStore>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader
    /// and an empty store.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(ScenarioStore::new())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared scenario store.
    pub fn store(&self) -> &RwLock<ScenarioStore> {
        &self.store
    }
}
