//! Declarative store builder.
//!
//! [`StoreBuilder`] accumulates named objects, static fragments, plugins and
//! nested modules, then exports two snapshots:
//! - [`StoreConfig`] — `{state, getters, actions, mutations, plugins, modules, strict}`
//!   for the host's store constructor
//! - [`Mixin`] — `{computed}` for the host's component property block
//!
//! Objects registered without overrides get convention-derived bindings
//! (see [`defaults`]); a [`StoreManifest`] declares the same registrations as
//! a JSON or TOML document.

mod builder;
pub mod defaults;
mod manifest;
mod snapshot;

pub use builder::StoreBuilder;
pub use manifest::{ObjectEntry, StoreManifest};
pub use snapshot::{Mixin, StoreConfig, StoreLayout};

pub use statekit_model::{
    Action, BoundStore, CommitContext, ComputedProperty, Getter, Mapping, Mutation,
    ObjectDefinition, Plugin, StateTree, StaticDefinition, Value,
};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by registration and manifest loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] statekit_model::Error),

    #[error("manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("manifest TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// True for an empty or otherwise unusable object name.
    #[must_use]
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Error::Model(statekit_model::Error::InvalidName(_)))
    }

    /// True for a malformed definition or manifest document.
    #[must_use]
    pub fn is_invalid_definition(&self) -> bool {
        matches!(
            self,
            Error::Model(statekit_model::Error::InvalidDefinition(_))
                | Error::Json(_)
                | Error::Toml(_)
        )
    }
}
