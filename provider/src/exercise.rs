//! The `brickbybrick_exercise` resource.

use std::sync::Arc;

use brickbybrick_core::{Exercise, ExercisePayload, Session, Transport, UreqTransport};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::resource::{state_id, Resource};

/// Starting weight, in lbs, when the configuration leaves it out.
pub const DEFAULT_EXERCISE_WEIGHT: f32 = 5.0;

fn default_weight() -> f32 {
    DEFAULT_EXERCISE_WEIGHT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseState {
    /// Server-assigned; absent until created or imported.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "default_weight")]
    pub default_weight: f32,
}

impl ExerciseState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            default_weight: DEFAULT_EXERCISE_WEIGHT,
        }
    }

    pub fn with_default_weight(mut self, default_weight: f32) -> Self {
        self.default_weight = default_weight;
        self
    }

    fn payload(&self) -> ExercisePayload {
        ExercisePayload {
            name: self.name.clone(),
            default_weight: self.default_weight,
        }
    }
}

impl From<Exercise> for ExerciseState {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: Some(exercise.id.to_string()),
            name: exercise.name,
            default_weight: exercise.default_weight,
        }
    }
}

#[derive(Debug)]
pub struct ExerciseResource<T = UreqTransport> {
    session: Arc<Session<T>>,
}

impl<T> Clone for ExerciseResource<T> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
        }
    }
}

impl<T: Transport> ExerciseResource<T> {
    pub fn new(session: Arc<Session<T>>) -> Self {
        Self { session }
    }
}

impl<T: Transport> Resource for ExerciseResource<T> {
    type State = ExerciseState;

    fn type_name_suffix(&self) -> &'static str {
        "_exercise"
    }

    fn create(&self, plan: ExerciseState) -> Result<ExerciseState, Diagnostics> {
        let created: Exercise = self
            .session
            .create::<Exercise>(&plan.payload(), None)
            .map_err(|e| {
                Diagnostic::error(
                    "Error creating exercise",
                    format!("Could not create exercise, unexpected error: {e}"),
                )
            })?;
        info!(id = %created.id, "created exercise");
        Ok(created.into())
    }

    fn read(&self, state: ExerciseState) -> Result<ExerciseState, Diagnostics> {
        let id = state_id(state.id.as_deref(), "exercise")?;
        let refreshed: Exercise = self.session.get::<Exercise>(id, None).map_err(|e| {
            Diagnostic::error(
                "Error Reading BrickByBrick Exercise",
                format!("Could not read BrickByBrick exercise ID {id}: {e}"),
            )
        })?;
        Ok(refreshed.into())
    }

    fn update(&self, plan: ExerciseState) -> Result<ExerciseState, Diagnostics> {
        let id = state_id(plan.id.as_deref(), "exercise")?;
        let updated: Exercise = self
            .session
            .update::<Exercise>(id, &plan.payload(), None)
            .map_err(|e| {
                Diagnostic::error(
                    "Error updating exercise",
                    format!("Could not update exercise, unexpected error: {e}"),
                )
            })?;
        Ok(updated.into())
    }

    fn delete(&self, state: &ExerciseState) -> Result<(), Diagnostics> {
        let id = state_id(state.id.as_deref(), "exercise")?;
        self.session.delete::<Exercise>(id, None).map_err(|e| {
            Diagnostic::error(
                "Error Deleting BrickByBrick Exercise",
                format!("Could not delete exercise, unexpected error: {e}"),
            )
        })?;
        info!(%id, "deleted exercise");
        Ok(())
    }

    fn import_state(&self, id: &str) -> Result<ExerciseState, Diagnostics> {
        let id = state_id(Some(id), "exercise")?;
        Ok(ExerciseState {
            id: Some(id.to_string()),
            ..ExerciseState::new("")
        })
    }
}
