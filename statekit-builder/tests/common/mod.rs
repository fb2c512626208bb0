//! In-memory host used to run exported handlers end to end.

#![allow(dead_code)]

use statekit_builder::{BoundStore, CommitContext, StateTree, StoreConfig, Value};

/// Executes a [`StoreConfig`] the way a host runtime would: actions commit,
/// mutations write into `state`, getters read from it.
pub struct MemoryHost {
    pub config: StoreConfig,
    pub state: StateTree,
    pub commits: Vec<(String, Value)>,
    pub dispatches: Vec<(String, Value)>,
}

impl MemoryHost {
    /// Creates the host and installs the config's plugins in order.
    pub fn new(config: StoreConfig) -> Self {
        let mut host = Self {
            state: config.state.clone(),
            config,
            commits: Vec::new(),
            dispatches: Vec::new(),
        };
        for plugin in host.config.plugins.clone() {
            plugin.install(&mut host);
        }
        host
    }

    pub fn state_of(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }
}

impl CommitContext for MemoryHost {
    fn commit(&mut self, mutation: &str, payload: Value) {
        self.commits.push((mutation.to_string(), payload.clone()));
        if let Some(m) = self.config.mutations.get(mutation) {
            m.apply(&mut self.state, payload);
        }
    }
}

impl BoundStore for MemoryHost {
    fn getter(&self, key: &str) -> Option<Value> {
        self.config.getters.get(key).map(|g| g.read(&self.state))
    }

    fn dispatch(&mut self, action: &str, payload: Value) {
        self.dispatches.push((action.to_string(), payload.clone()));
        if let Some(a) = self.config.actions.get(action).cloned() {
            a.invoke(self, payload);
        }
    }
}
