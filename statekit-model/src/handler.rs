//! Shared handler objects stored in the builder's namespaces.
//!
//! Each handler wraps an `Arc`'d closure, so cloning a namespace mapping
//! copies handles and never the closures themselves.

use crate::{BoundStore, CommitContext, StateTree, Value};
use std::fmt;
use std::sync::Arc;

type GetterFn = dyn Fn(&StateTree) -> Value + Send + Sync;
type ActionFn = dyn Fn(&mut dyn CommitContext, Value) + Send + Sync;
type MutationFn = dyn Fn(&mut StateTree, Value) + Send + Sync;
type ComputedGetFn = dyn Fn(&dyn BoundStore) -> Value + Send + Sync;
type ComputedSetFn = dyn Fn(&mut dyn BoundStore, Value) + Send + Sync;
type PluginFn = dyn Fn(&mut dyn BoundStore) + Send + Sync;

/// Derives a value from the state tree.
#[derive(Clone)]
pub struct Getter(Arc<GetterFn>);

impl Getter {
    pub fn new(f: impl Fn(&StateTree) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn read(&self, state: &StateTree) -> Value {
        (self.0)(state)
    }

    /// True when both handles point at the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Getter(..)")
    }
}

/// Handles a dispatched payload, usually by committing a mutation.
#[derive(Clone)]
pub struct Action(Arc<ActionFn>);

impl Action {
    pub fn new(f: impl Fn(&mut dyn CommitContext, Value) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn invoke(&self, ctx: &mut dyn CommitContext, payload: Value) {
        (self.0)(ctx, payload)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// Writes a payload into the state tree.
#[derive(Clone)]
pub struct Mutation(Arc<MutationFn>);

impl Mutation {
    pub fn new(f: impl Fn(&mut StateTree, Value) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn apply(&self, state: &mut StateTree, payload: Value) {
        (self.0)(state, payload)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mutation(..)")
    }
}

/// A `{get, set}` property descriptor for a component's computed block.
///
/// Both halves receive the bound store as an argument; the host passes the
/// store its component is attached to.
#[derive(Clone)]
pub struct ComputedProperty {
    getter: Arc<ComputedGetFn>,
    setter: Arc<ComputedSetFn>,
}

impl ComputedProperty {
    pub fn new(
        get: impl Fn(&dyn BoundStore) -> Value + Send + Sync + 'static,
        set: impl Fn(&mut dyn BoundStore, Value) + Send + Sync + 'static,
    ) -> Self {
        Self {
            getter: Arc::new(get),
            setter: Arc::new(set),
        }
    }

    pub fn get(&self, store: &dyn BoundStore) -> Value {
        (self.getter)(store)
    }

    pub fn set(&self, store: &mut dyn BoundStore, value: Value) {
        (self.setter)(store, value)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.getter, &other.getter) && Arc::ptr_eq(&self.setter, &other.setter)
    }
}

impl fmt::Debug for ComputedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ComputedProperty { get, set }")
    }
}

/// A named hook the host installs against the constructed store.
///
/// The builder treats plugins as opaque and only preserves their order.
#[derive(Clone)]
pub struct Plugin {
    name: String,
    install: Arc<PluginFn>,
}

impl Plugin {
    pub fn new(
        name: impl Into<String>,
        install: impl Fn(&mut dyn BoundStore) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            install: Arc::new(install),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn install(&self, store: &mut dyn BoundStore) {
        (self.install)(store)
    }
}

impl fmt::Debug for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugin").field("name", &self.name).finish()
    }
}
