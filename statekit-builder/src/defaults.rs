//! Convention-derived bindings for an object registered without overrides.
//!
//! For an object `name` with keys from [`ObjectKeys`]:
//! - state: `name -> initial value` (or `Null`)
//! - getter `get<Name>`: reads `state[name]`
//! - action `update<Name>`: commits `set<Name>` with the payload
//! - mutation `set<Name>`: assigns the payload to `state[name]`
//! - computed `name`: reads `get<Name>` from the bound store, dispatches `update<Name>`

use statekit_model::{
    Action, ComputedProperty, Getter, Mapping, Mutation, ObjectDefinition, ObjectKeys, Value,
};

pub fn default_state(keys: &ObjectKeys, initial_value: Option<Value>) -> Mapping<Value> {
    single(&keys.name, initial_value.unwrap_or(Value::Null))
}

pub fn default_getter(keys: &ObjectKeys) -> Getter {
    let name = keys.name.clone();
    Getter::new(move |state| state.get(&name).cloned().unwrap_or(Value::Null))
}

pub fn default_action(keys: &ObjectKeys) -> Action {
    let mutation = keys.mutation.clone();
    Action::new(move |ctx, payload| ctx.commit(&mutation, payload))
}

pub fn default_mutation(keys: &ObjectKeys) -> Mutation {
    let name = keys.name.clone();
    Mutation::new(move |state, payload| {
        state.insert(name.clone(), payload);
    })
}

pub fn default_computed(keys: &ObjectKeys) -> ComputedProperty {
    let getter = keys.getter.clone();
    let action = keys.action.clone();
    ComputedProperty::new(
        move |store| store.getter(&getter).unwrap_or(Value::Null),
        move |store, value| store.dispatch(&action, value),
    )
}

/// One object's contribution to each namespace, resolved before any merge.
#[derive(Debug, Clone)]
pub struct ObjectBindings {
    pub keys: ObjectKeys,
    pub state: Mapping<Value>,
    pub getters: Mapping<Getter>,
    pub actions: Mapping<Action>,
    pub mutations: Mapping<Mutation>,
    pub computed: ComputedProperty,
}

impl ObjectBindings {
    /// Applies overrides from `definition` and fills every other namespace
    /// from the convention. Fails only on an invalid name.
    pub fn resolve(name: &str, definition: ObjectDefinition) -> statekit_model::Result<Self> {
        let keys = ObjectKeys::derive(name)?;
        let ObjectDefinition {
            initial_value,
            state,
            getters,
            actions,
            mutations,
            computed,
        } = definition;

        Ok(Self {
            state: state.unwrap_or_else(|| default_state(&keys, initial_value)),
            getters: getters.unwrap_or_else(|| single(&keys.getter, default_getter(&keys))),
            actions: actions.unwrap_or_else(|| single(&keys.action, default_action(&keys))),
            mutations: mutations
                .unwrap_or_else(|| single(&keys.mutation, default_mutation(&keys))),
            computed: computed.unwrap_or_else(|| default_computed(&keys)),
            keys,
        })
    }
}

fn single<T>(key: &str, value: T) -> Mapping<T> {
    let mut map = Mapping::default();
    map.insert(key.to_string(), value);
    map
}
