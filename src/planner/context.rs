//! Invocation contexts handed to planners by the host

use std::ops::Deref;

/// Read-only view of the current invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadonlyContext {
    /// Identifier of the current invocation
    pub invocation_id: String,
    /// Name of the agent being run
    pub agent_name: String,
}

impl ReadonlyContext {
    pub fn new(invocation_id: impl Into<String>, agent_name: impl Into<String>) -> Self {
        Self {
            invocation_id: invocation_id.into(),
            agent_name: agent_name.into(),
        }
    }
}

/// Context passed to response callbacks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackContext {
    readonly: ReadonlyContext,
}

impl CallbackContext {
    pub fn new(readonly: ReadonlyContext) -> Self {
        Self { readonly }
    }
}

impl Deref for CallbackContext {
    type Target = ReadonlyContext;

    fn deref(&self) -> &Self::Target {
        &self.readonly
    }
}

impl From<ReadonlyContext> for CallbackContext {
    fn from(readonly: ReadonlyContext) -> Self {
        Self::new(readonly)
    }
}
