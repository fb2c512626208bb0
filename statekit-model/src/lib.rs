//! Core binding model for statekit.
//!
//! Defines the types that the store builder and its host runtime share:
//! - [`Getter`], [`Action`], [`Mutation`], [`ComputedProperty`], [`Plugin`] — shared handler objects
//! - [`CommitContext`] / [`BoundStore`] — capabilities the host runtime passes into handlers
//! - [`ObjectDefinition`] / [`StaticDefinition`] — per-object overrides and hand-authored fragments
//! - [`Role`], [`capitalize`], [`conventional_key`] — the `get`/`update`/`set` naming convention
//!
//! Nothing here executes a store. The host framework owns state reactivity and
//! calls back into these handlers with its own context objects.

mod capability;
mod definition;
mod handler;
mod naming;

pub use capability::{BoundStore, CommitContext};
pub use definition::{ObjectDefinition, StaticDefinition};
pub use handler::{Action, ComputedProperty, Getter, Mutation, Plugin};
pub use naming::{ObjectKeys, Role, capitalize, conventional_key, validate_name};

/// Any serializable value held in store state or passed as a payload.
pub type Value = serde_json::Value;

/// Insertion-ordered, string-keyed map used for every store namespace.
pub type Mapping<T> = indexmap::IndexMap<String, T>;

/// The state tree a host hands to getters and mutations.
pub type StateTree = Mapping<Value>;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating names and definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid object name: {0}")]
    InvalidName(String),

    #[error("invalid definition: {0}")]
    InvalidDefinition(String),
}
