//! Point-in-time exports of a builder's accumulators.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use statekit_model::{Action, ComputedProperty, Getter, Mapping, Mutation, Plugin, Value};

/// The `{computed}` block a component mixes in.
#[derive(Debug, Clone, Default)]
pub struct Mixin {
    pub computed: Mapping<ComputedProperty>,
}

/// Everything the host needs to construct a store.
///
/// The same shape nests as a module value, so one builder's export can be
/// registered as a module of another.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub state: Mapping<Value>,
    pub getters: Mapping<Getter>,
    pub actions: Mapping<Action>,
    pub mutations: Mapping<Mutation>,
    pub plugins: Vec<Plugin>,
    pub modules: Mapping<StoreConfig>,
    pub strict: bool,
}

impl StoreConfig {
    /// Initial state as a JSON object, keys in registration order.
    #[must_use]
    pub fn initial_state(&self) -> Value {
        Value::Object(
            self.state
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Handler-free description of this config and its modules.
    #[must_use]
    pub fn layout(&self) -> StoreLayout {
        StoreLayout {
            state: keys(&self.state),
            getters: keys(&self.getters),
            actions: keys(&self.actions),
            mutations: keys(&self.mutations),
            plugins: self.plugins.iter().map(|p| p.name().to_string()).collect(),
            modules: self
                .modules
                .iter()
                .map(|(name, module)| (name.clone(), module.layout()))
                .collect(),
            strict: self.strict,
        }
    }
}

/// Names registered in each namespace of a [`StoreConfig`].
///
/// Serializable, so a builder's output can be logged or diffed without
/// touching any handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLayout {
    pub state: Vec<String>,
    pub getters: Vec<String>,
    pub actions: Vec<String>,
    pub mutations: Vec<String>,
    pub plugins: Vec<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub modules: Mapping<StoreLayout>,
    pub strict: bool,
}

fn keys<T>(map: &Mapping<T>) -> Vec<String> {
    map.keys().cloned().collect()
}
