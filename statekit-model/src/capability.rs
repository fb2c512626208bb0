use crate::Value;

/// Dispatch context handed to an action by the host runtime.
///
/// The builder never implements this; it only produces actions that call it.
pub trait CommitContext {
    /// Run the mutation registered under `mutation` with `payload`.
    fn commit(&mut self, mutation: &str, payload: Value);
}

/// The store instance a component is bound to, as seen by computed accessors.
///
/// Passed explicitly on every call so computed properties carry no hidden
/// receiver state.
pub trait BoundStore {
    /// Current value of the getter registered under `key`, if any.
    fn getter(&self, key: &str) -> Option<Value>;

    /// Dispatch the action registered under `action` with `payload`.
    fn dispatch(&mut self, action: &str, payload: Value);
}
