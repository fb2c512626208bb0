//! The naming convention shared by every default binding.
//!
//! An object called `user` owns the getter `getUser`, the action `updateUser`,
//! the mutation `setUser` and the computed property `user`. All four keys are
//! derived here and nowhere else.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// The namespace a convention-derived key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Getter,
    Action,
    Mutation,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Getter, Role::Action, Role::Mutation];

    /// Key prefix for this role.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Role::Getter => "get",
            Role::Action => "update",
            Role::Mutation => "set",
        }
    }
}

/// Uppercases the first character of `name` and leaves the rest unchanged.
///
/// Some characters uppercase to more than one (`ß` becomes `SS`). An empty
/// input yields an empty string; callers that need a key go through
/// [`conventional_key`], which rejects it.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rejects names that cannot anchor a set of bindings.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName("object name must not be empty".into()));
    }
    Ok(())
}

/// Builds the conventional key for `role`, e.g. `(Action, "user")` -> `updateUser`.
pub fn conventional_key(role: Role, name: &str) -> Result<String> {
    validate_name(name)?;
    Ok(format!("{}{}", role.prefix(), capitalize(name)))
}

/// Every key derived from one object name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKeys {
    pub name: String,
    pub getter: String,
    pub action: String,
    pub mutation: String,
}

impl ObjectKeys {
    pub fn derive(name: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            getter: conventional_key(Role::Getter, name)?,
            action: conventional_key(Role::Action, name)?,
            mutation: conventional_key(Role::Mutation, name)?,
        })
    }

    /// Computed properties are keyed by the bare object name.
    #[must_use]
    pub fn computed(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::Getter => &self.getter,
            Role::Action => &self.action,
            Role::Mutation => &self.mutation,
        }
    }
}
