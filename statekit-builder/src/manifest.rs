//! Declarative store documents.
//!
//! A manifest lists the objects, static state and nested modules of a store
//! as data. Handlers cannot be written in JSON or TOML, so every object gets
//! its getter, action, mutation and computed property from the convention.
//!
//! ```toml
//! strict = true
//!
//! [static_state]
//! theme = "dark"
//!
//! [[objects]]
//! name = "user"
//! initial_value = "anon"
//!
//! [modules.cart]
//! objects = [{ name = "items", initial_value = [] }]
//! ```

use crate::builder::StoreBuilder;
use crate::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use statekit_model::{Mapping, ObjectDefinition, StaticDefinition, Value, validate_name};
use tracing::debug;

/// One store, declared as data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreManifest {
    /// Overwrites the builder's strict flag when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub static_state: Mapping<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<ObjectEntry>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub modules: Mapping<StoreManifest>,
}

/// A named object with its data-only overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "initialValue", skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Value>,
    /// Replaces the `{name: initial_value}` default state entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Mapping<Value>>,
}

impl ObjectEntry {
    #[must_use]
    pub fn definition(&self) -> ObjectDefinition {
        ObjectDefinition {
            initial_value: self.initial_value.clone(),
            state: self.state.clone(),
            ..ObjectDefinition::default()
        }
    }
}

impl StoreManifest {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(s)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        let manifest: Self = serde_json::from_value(value)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(s)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Checks every object name, including those of nested modules.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.objects {
            validate_name(&entry.name)?;
        }
        for module in self.modules.values() {
            module.validate()?;
        }
        Ok(())
    }

    /// Registers the manifest into `builder`, in document order: strict flag,
    /// static state, objects, then modules.
    ///
    /// The whole document is validated and its modules built first, so a bad
    /// entry leaves the builder untouched.
    pub fn apply(&self, builder: &mut StoreBuilder) -> Result<()> {
        self.validate()?;
        let mut modules = Mapping::default();
        for (name, module) in &self.modules {
            modules.insert(name.clone(), module.build()?.export_config());
        }

        if let Some(strict) = self.strict {
            builder.set_strict_mode(strict);
        }
        if !self.static_state.is_empty() {
            builder.register_static(StaticDefinition {
                state: Some(self.static_state.clone()),
                ..StaticDefinition::default()
            });
        }
        for entry in &self.objects {
            builder.register_object(&entry.name, Some(entry.definition()))?;
        }
        if !modules.is_empty() {
            builder.register_modules(modules);
        }

        debug!(
            objects = self.objects.len(),
            modules = self.modules.len(),
            "applied store manifest"
        );
        Ok(())
    }

    /// Builds a fresh builder from this manifest alone.
    pub fn build(&self) -> Result<StoreBuilder> {
        let mut builder = StoreBuilder::new();
        self.apply(&mut builder)?;
        Ok(builder)
    }
}
