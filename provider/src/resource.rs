//! Lifecycle traits implemented by every managed resource and data source.
//!
//! State models keep identifiers as strings, the way the orchestrator stores
//! them; they are parsed into [`EntityId`] right before a call.

use brickbybrick_core::EntityId;

use crate::diagnostics::{Diagnostic, Diagnostics};

/// A remotely managed object with create/read/update/delete semantics.
pub trait Resource {
    type State;

    /// Suffix appended to the provider type name, e.g. `_exercise`.
    fn type_name_suffix(&self) -> &'static str;

    /// Check a planned state before it is sent anywhere.
    fn validate(&self, _plan: &Self::State) -> Result<(), Diagnostics> {
        Ok(())
    }

    /// Create the object and return the fully populated state.
    fn create(&self, plan: Self::State) -> Result<Self::State, Diagnostics>;

    /// Refresh `state` from the remote object.
    fn read(&self, state: Self::State) -> Result<Self::State, Diagnostics>;

    /// Replace the remote object with `plan`; the server response becomes
    /// the new state.
    fn update(&self, plan: Self::State) -> Result<Self::State, Diagnostics>;

    fn delete(&self, state: &Self::State) -> Result<(), Diagnostics>;

    /// Start tracking an existing object by id. Only the id is populated;
    /// a following `read` fills the rest.
    fn import_state(&self, id: &str) -> Result<Self::State, Diagnostics>;
}

/// A read-only view over remote objects.
pub trait DataSource {
    type State;

    fn type_name_suffix(&self) -> &'static str;

    fn read(&self) -> Result<Self::State, Diagnostics>;
}

/// Parse the `id` attribute of a state model.
pub(crate) fn state_id(id: Option<&str>, kind: &str) -> Result<EntityId, Diagnostics> {
    let raw = id.ok_or_else(|| {
        Diagnostic::attribute_error(
            "id",
            format!("Missing BrickByBrick {kind} ID"),
            format!("The {kind} state has no id; it must be created or imported first."),
        )
    })?;
    raw.parse().map_err(|e| {
        Diagnostic::attribute_error(
            "id",
            format!("Invalid BrickByBrick {kind} ID"),
            format!("Could not use {raw:?} as a {kind} id: {e}"),
        )
        .into()
    })
}
