//! The store builder and its accumulators.

use crate::defaults::ObjectBindings;
use crate::snapshot::{Mixin, StoreConfig, StoreLayout};
use crate::Result;
use statekit_model::{
    Action, ComputedProperty, Getter, Mapping, Mutation, ObjectDefinition, Plugin,
    StaticDefinition, Value,
};
use tracing::{debug, trace};

/// Accumulates store bindings across registration calls.
///
/// Every namespace merges last-write-wins per key: re-registering a key
/// replaces its value in place. Nothing is ever removed. Exports copy the
/// top-level mappings, so a snapshot never observes later registrations.
#[derive(Debug, Default)]
pub struct StoreBuilder {
    state: Mapping<Value>,
    getters: Mapping<Getter>,
    actions: Mapping<Action>,
    mutations: Mapping<Mutation>,
    computed: Mapping<ComputedProperty>,
    plugins: Vec<Plugin>,
    modules: Mapping<StoreConfig>,
    strict: bool,
}

impl StoreBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the strict flag preset.
    #[must_use]
    pub fn with_strict(strict: bool) -> Self {
        Self {
            strict,
            ..Self::default()
        }
    }

    /// Registers one named object.
    ///
    /// Each namespace takes the definition's override verbatim when present,
    /// otherwise a single convention-derived entry. An empty `name` is
    /// rejected before any namespace is touched.
    pub fn register_object(&mut self, name: &str, definition: Option<ObjectDefinition>) -> Result<()> {
        let bindings = ObjectBindings::resolve(name, definition.unwrap_or_default())?;
        let ObjectBindings {
            keys,
            state,
            getters,
            actions,
            mutations,
            computed,
        } = bindings;

        merge_into("state", &mut self.state, state);
        merge_into("getters", &mut self.getters, getters);
        merge_into("actions", &mut self.actions, actions);
        merge_into("mutations", &mut self.mutations, mutations);
        let mut computed_entry = Mapping::default();
        computed_entry.insert(keys.computed().to_string(), computed);
        merge_into("computed", &mut self.computed, computed_entry);

        debug!(name, "registered object");
        Ok(())
    }

    /// Merges a hand-authored fragment without any convention defaults.
    ///
    /// Namespaces the definition omits are left untouched; an empty
    /// definition is a no-op.
    pub fn register_static(&mut self, definition: StaticDefinition) {
        if definition.is_empty() {
            trace!("static definition is empty, nothing to merge");
            return;
        }
        let StaticDefinition {
            state,
            getters,
            actions,
            mutations,
            computed,
        } = definition;

        if let Some(state) = state {
            merge_into("state", &mut self.state, state);
        }
        if let Some(getters) = getters {
            merge_into("getters", &mut self.getters, getters);
        }
        if let Some(actions) = actions {
            merge_into("actions", &mut self.actions, actions);
        }
        if let Some(mutations) = mutations {
            merge_into("mutations", &mut self.mutations, mutations);
        }
        if let Some(computed) = computed {
            merge_into("computed", &mut self.computed, computed);
        }
        debug!("registered static definition");
    }

    /// Appends a plugin; plugins run in registration order.
    pub fn register_plugin(&mut self, plugin: Plugin) {
        debug!(plugin = plugin.name(), position = self.plugins.len(), "registered plugin");
        self.plugins.push(plugin);
    }

    /// Shallow-merges nested modules by name.
    pub fn register_modules(&mut self, modules: Mapping<StoreConfig>) {
        let count = modules.len();
        merge_into("modules", &mut self.modules, modules);
        debug!(count, "registered modules");
    }

    pub fn set_strict_mode(&mut self, strict: bool) {
        debug!(strict, "strict mode set");
        self.strict = strict;
    }

    /// Snapshot of the computed namespace.
    #[must_use]
    pub fn export_mixin(&self) -> Mixin {
        trace!(computed = self.computed.len(), "exporting mixin");
        Mixin {
            computed: self.computed.clone(),
        }
    }

    /// Snapshot of everything the host store constructor consumes.
    #[must_use]
    pub fn export_config(&self) -> StoreConfig {
        trace!(
            state = self.state.len(),
            getters = self.getters.len(),
            actions = self.actions.len(),
            mutations = self.mutations.len(),
            plugins = self.plugins.len(),
            modules = self.modules.len(),
            strict = self.strict,
            "exporting store config"
        );
        StoreConfig {
            state: self.state.clone(),
            getters: self.getters.clone(),
            actions: self.actions.clone(),
            mutations: self.mutations.clone(),
            plugins: self.plugins.clone(),
            modules: self.modules.clone(),
            strict: self.strict,
        }
    }

    /// Key-level description of the current store config.
    #[must_use]
    pub fn layout(&self) -> StoreLayout {
        self.export_config().layout()
    }

    /// Keys currently in the computed namespace.
    #[must_use]
    pub fn computed_keys(&self) -> Vec<&str> {
        self.computed.keys().map(String::as_str).collect()
    }
}

fn merge_into<T>(namespace: &'static str, target: &mut Mapping<T>, entries: Mapping<T>) {
    for (key, value) in entries {
        if target.contains_key(&key) {
            debug!(namespace, key = key.as_str(), "overwriting existing binding");
        }
        target.insert(key, value);
    }
}
