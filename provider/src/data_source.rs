//! The `brickbybrick_exercises` and `brickbybrick_strategies` data sources.
//!
//! Both list every object on the account. Unlike resource state, ids here are
//! plain integers.

use std::sync::Arc;

use brickbybrick_core::{Exercise, Session, Strategy, Transport, UreqTransport};
use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::resource::DataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseModel {
    pub id: u64,
    pub name: String,
    pub default_weight: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExercisesState {
    pub exercises: Vec<ExerciseModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyModel {
    pub id: u64,
    pub display_name: String,
    pub overload_rate: f32,
    pub exercises_per_workout: i32,
    pub target_sets_per_exercise: i32,
    pub target_reps_per_set: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategiesState {
    pub strategies: Vec<StrategyModel>,
}

#[derive(Debug)]
pub struct ExercisesDataSource<T = UreqTransport> {
    session: Arc<Session<T>>,
}

impl<T: Transport> ExercisesDataSource<T> {
    pub fn new(session: Arc<Session<T>>) -> Self {
        Self { session }
    }
}

impl<T: Transport> DataSource for ExercisesDataSource<T> {
    type State = ExercisesState;

    fn type_name_suffix(&self) -> &'static str {
        "_exercises"
    }

    fn read(&self) -> Result<ExercisesState, Diagnostics> {
        let exercises = self
            .session
            .list::<Exercise>(None)
            .map_err(|e| Diagnostic::error("Unable to Read BrickByBrick Exercises", e.to_string()))?;

        Ok(ExercisesState {
            exercises: exercises
                .into_iter()
                .map(|exercise| ExerciseModel {
                    id: exercise.id.get(),
                    name: exercise.name,
                    default_weight: exercise.default_weight,
                })
                .collect(),
        })
    }
}

#[derive(Debug)]
pub struct StrategiesDataSource<T = UreqTransport> {
    session: Arc<Session<T>>,
}

impl<T: Transport> StrategiesDataSource<T> {
    pub fn new(session: Arc<Session<T>>) -> Self {
        Self { session }
    }
}

impl<T: Transport> DataSource for StrategiesDataSource<T> {
    type State = StrategiesState;

    fn type_name_suffix(&self) -> &'static str {
        "_strategies"
    }

    fn read(&self) -> Result<StrategiesState, Diagnostics> {
        let strategies = self
            .session
            .list::<Strategy>(None)
            .map_err(|e| Diagnostic::error("Unable to Read BrickByBrick Strategies", e.to_string()))?;

        Ok(StrategiesState {
            strategies: strategies
                .into_iter()
                .map(|strategy| StrategyModel {
                    id: strategy.id.get(),
                    display_name: strategy.display_name,
                    overload_rate: strategy.overload_rate,
                    exercises_per_workout: strategy.exercises_per_workout,
                    target_sets_per_exercise: strategy.target_sets_per_exercise,
                    target_reps_per_set: strategy.target_reps_per_set,
                })
                .collect(),
        })
    }
}
