use crate::{Action, ComputedProperty, Error, Getter, Mapping, Mutation, Result, Value};
use serde::Deserialize;

/// Optional overrides for one named object.
///
/// Every field left as `None` is filled in from the naming convention. A
/// field that is `Some` replaces the convention for that namespace entirely;
/// an empty override mapping therefore contributes nothing.
#[derive(Debug, Clone, Default)]
pub struct ObjectDefinition {
    /// Initial state value; `None` registers the key with `Value::Null`.
    pub initial_value: Option<Value>,
    pub state: Option<Mapping<Value>>,
    pub getters: Option<Mapping<Getter>>,
    pub actions: Option<Mapping<Action>>,
    pub mutations: Option<Mapping<Mutation>>,
    /// Descriptor stored under the object's own name in the computed namespace.
    pub computed: Option<ComputedProperty>,
}

/// Data-only shape accepted by [`ObjectDefinition::from_json`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct ObjectData {
    #[serde(default, alias = "initial_value")]
    initial_value: Option<Value>,
    #[serde(default)]
    state: Option<Mapping<Value>>,
}

impl ObjectDefinition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a definition that only sets the initial value.
    #[must_use]
    pub fn initial(value: impl Into<Value>) -> Self {
        Self::new().with_initial_value(value)
    }

    /// Parses the data-only part of a definition from JSON.
    ///
    /// Accepts an object with `initialValue` (or `initial_value`) and a
    /// `state` mapping. Handlers cannot be expressed as data, so `getters`,
    /// `actions`, `mutations`, `computed` and any other field are rejected.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Some(fields) = value.as_object() else {
            return Err(Error::InvalidDefinition(format!(
                "expected an object definition, found {}",
                json_kind(value)
            )));
        };
        for handler_field in ["getters", "actions", "mutations", "computed"] {
            if fields.contains_key(handler_field) {
                return Err(Error::InvalidDefinition(format!(
                    "`{handler_field}` holds handlers and cannot be loaded from JSON"
                )));
            }
        }
        let data: ObjectData = serde_json::from_value(value.clone())
            .map_err(|e| Error::InvalidDefinition(e.to_string()))?;
        Ok(Self {
            initial_value: data.initial_value,
            state: data.state,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_initial_value(mut self, value: impl Into<Value>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_state(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        insert(&mut self.state, key, value.into());
        self
    }

    #[must_use]
    pub fn with_getter(mut self, key: impl Into<String>, getter: Getter) -> Self {
        insert(&mut self.getters, key, getter);
        self
    }

    #[must_use]
    pub fn with_action(mut self, key: impl Into<String>, action: Action) -> Self {
        insert(&mut self.actions, key, action);
        self
    }

    #[must_use]
    pub fn with_mutation(mut self, key: impl Into<String>, mutation: Mutation) -> Self {
        insert(&mut self.mutations, key, mutation);
        self
    }

    #[must_use]
    pub fn with_computed(mut self, computed: ComputedProperty) -> Self {
        self.computed = Some(computed);
        self
    }
}

/// A hand-authored fragment merged into the namespaces without any defaults.
///
/// Omitted namespaces leave the builder's accumulators untouched.
#[derive(Debug, Clone, Default)]
pub struct StaticDefinition {
    pub state: Option<Mapping<Value>>,
    pub getters: Option<Mapping<Getter>>,
    pub actions: Option<Mapping<Action>>,
    pub mutations: Option<Mapping<Mutation>>,
    pub computed: Option<Mapping<ComputedProperty>>,
}

impl StaticDefinition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no namespace was supplied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_none()
            && self.getters.is_none()
            && self.actions.is_none()
            && self.mutations.is_none()
            && self.computed.is_none()
    }

    #[must_use]
    pub fn with_state(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        insert(&mut self.state, key, value.into());
        self
    }

    #[must_use]
    pub fn with_getter(mut self, key: impl Into<String>, getter: Getter) -> Self {
        insert(&mut self.getters, key, getter);
        self
    }

    #[must_use]
    pub fn with_action(mut self, key: impl Into<String>, action: Action) -> Self {
        insert(&mut self.actions, key, action);
        self
    }

    #[must_use]
    pub fn with_mutation(mut self, key: impl Into<String>, mutation: Mutation) -> Self {
        insert(&mut self.mutations, key, mutation);
        self
    }

    #[must_use]
    pub fn with_computed(mut self, key: impl Into<String>, computed: ComputedProperty) -> Self {
        insert(&mut self.computed, key, computed);
        self
    }
}

fn insert<T>(slot: &mut Option<Mapping<T>>, key: impl Into<String>, value: T) {
    slot.get_or_insert_with(Mapping::default)
        .insert(key.into(), value);
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
