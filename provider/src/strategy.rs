//! The `brickbybrick_strategy` resource.
//!
//! Attribute bounds are checked before any request is sent, so an invalid
//! plan never reaches the API.

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::sync::Arc;

use brickbybrick_core::{Session, Strategy, StrategyPayload, Transport, UreqTransport};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::resource::{state_id, Resource};

pub const DISPLAY_NAME_LENGTH: RangeInclusive<usize> = 1..=64;
pub const OVERLOAD_RATE_RANGE: RangeInclusive<f32> = 0.0..=100.0;
pub const EXERCISES_PER_WORKOUT_RANGE: RangeInclusive<i32> = 1..=100;
pub const TARGET_SETS_PER_EXERCISE_RANGE: RangeInclusive<i32> = 1..=10_000;
pub const TARGET_REPS_PER_SET_RANGE: RangeInclusive<i32> = 1..=100_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyState {
    #[serde(default)]
    pub id: Option<String>,
    pub display_name: String,
    pub overload_rate: f32,
    pub exercises_per_workout: i32,
    pub target_sets_per_exercise: i32,
    pub target_reps_per_set: i32,
}

impl StrategyState {
    fn payload(&self) -> StrategyPayload {
        StrategyPayload {
            display_name: self.display_name.clone(),
            overload_rate: self.overload_rate,
            exercises_per_workout: self.exercises_per_workout,
            target_reps_per_set: self.target_reps_per_set,
            target_sets_per_exercise: self.target_sets_per_exercise,
        }
    }
}

impl From<Strategy> for StrategyState {
    fn from(strategy: Strategy) -> Self {
        Self {
            id: Some(strategy.id.to_string()),
            display_name: strategy.display_name,
            overload_rate: strategy.overload_rate,
            exercises_per_workout: strategy.exercises_per_workout,
            target_sets_per_exercise: strategy.target_sets_per_exercise,
            target_reps_per_set: strategy.target_reps_per_set,
        }
    }
}

fn check_range<N: PartialOrd + Display>(
    diags: &mut Diagnostics,
    attribute: &str,
    value: N,
    range: &RangeInclusive<N>,
) {
    if !range.contains(&value) {
        diags.push(Diagnostic::attribute_error(
            attribute,
            "Invalid Attribute Value",
            format!(
                "Attribute {attribute} value must be between {} and {}, got: {value}",
                range.start(),
                range.end()
            ),
        ));
    }
}

#[derive(Debug)]
pub struct StrategyResource<T = UreqTransport> {
    session: Arc<Session<T>>,
}

impl<T> Clone for StrategyResource<T> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
        }
    }
}

impl<T: Transport> StrategyResource<T> {
    pub fn new(session: Arc<Session<T>>) -> Self {
        Self { session }
    }
}

impl<T: Transport> Resource for StrategyResource<T> {
    type State = StrategyState;

    fn type_name_suffix(&self) -> &'static str {
        "_strategy"
    }

    fn validate(&self, plan: &StrategyState) -> Result<(), Diagnostics> {
        let mut diags = Diagnostics::new();

        let length = plan.display_name.chars().count();
        if !DISPLAY_NAME_LENGTH.contains(&length) {
            diags.push(Diagnostic::attribute_error(
                "display_name",
                "Invalid Attribute Value Length",
                format!(
                    "Attribute display_name string length must be between {} and {}, got: {length}",
                    DISPLAY_NAME_LENGTH.start(),
                    DISPLAY_NAME_LENGTH.end()
                ),
            ));
        }
        // NaN fails `contains`, so it is rejected here too.
        check_range(&mut diags, "overload_rate", plan.overload_rate, &OVERLOAD_RATE_RANGE);
        check_range(
            &mut diags,
            "exercises_per_workout",
            plan.exercises_per_workout,
            &EXERCISES_PER_WORKOUT_RANGE,
        );
        check_range(
            &mut diags,
            "target_sets_per_exercise",
            plan.target_sets_per_exercise,
            &TARGET_SETS_PER_EXERCISE_RANGE,
        );
        check_range(
            &mut diags,
            "target_reps_per_set",
            plan.target_reps_per_set,
            &TARGET_REPS_PER_SET_RANGE,
        );

        diags.into_result(())
    }

    fn create(&self, plan: StrategyState) -> Result<StrategyState, Diagnostics> {
        self.validate(&plan)?;
        let created: Strategy = self
            .session
            .create::<Strategy>(&plan.payload(), None)
            .map_err(|e| {
                Diagnostic::error(
                    "Error creating strategy",
                    format!("Could not create strategy, unexpected error: {e}"),
                )
            })?;
        info!(id = %created.id, "created strategy");
        Ok(created.into())
    }

    fn read(&self, state: StrategyState) -> Result<StrategyState, Diagnostics> {
        let id = state_id(state.id.as_deref(), "strategy")?;
        let refreshed: Strategy = self.session.get::<Strategy>(id, None).map_err(|e| {
            Diagnostic::error(
                "Error Reading BrickByBrick Strategy",
                format!("Could not read BrickByBrick strategy ID {id}: {e}"),
            )
        })?;
        Ok(refreshed.into())
    }

    fn update(&self, plan: StrategyState) -> Result<StrategyState, Diagnostics> {
        let id = state_id(plan.id.as_deref(), "strategy")?;
        self.validate(&plan)?;
        let updated: Strategy = self
            .session
            .update::<Strategy>(id, &plan.payload(), None)
            .map_err(|e| {
                Diagnostic::error(
                    "Error updating strategy",
                    format!("Could not update strategy, unexpected error: {e}"),
                )
            })?;
        Ok(updated.into())
    }

    fn delete(&self, state: &StrategyState) -> Result<(), Diagnostics> {
        let id = state_id(state.id.as_deref(), "strategy")?;
        self.session.delete::<Strategy>(id, None).map_err(|e| {
            Diagnostic::error(
                "Error Deleting BrickByBrick Strategy",
                format!("Could not delete strategy, unexpected error: {e}"),
            )
        })?;
        info!(%id, "deleted strategy");
        Ok(())
    }

    fn import_state(&self, id: &str) -> Result<StrategyState, Diagnostics> {
        let id = state_id(Some(id), "strategy")?;
        Ok(StrategyState {
            id: Some(id.to_string()),
            display_name: String::new(),
            overload_rate: 0.0,
            exercises_per_workout: 0,
            target_sets_per_exercise: 0,
            target_reps_per_set: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{session, Scripted};

    const LINEAR: &str = r#"{"id":3,"display_name":"Linear","overload_rate":5,"exercises_per_workout":4,"target_reps_per_set":8,"target_sets_per_exercise":3}"#;

    fn plan() -> StrategyState {
        StrategyState {
            id: None,
            display_name: "Linear".to_string(),
            overload_rate: 5.0,
            exercises_per_workout: 4,
            target_sets_per_exercise: 3,
            target_reps_per_set: 8,
        }
    }

    fn attributes(diags: &Diagnostics) -> Vec<&str> {
        diags
            .iter()
            .filter_map(|d| d.attribute.as_deref())
            .collect()
    }

    #[test]
    fn valid_plan_passes_validation() {
        let resource = StrategyResource::new(session(Scripted::default()));
        assert!(resource.validate(&plan()).is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        let resource = StrategyResource::new(session(Scripted::default()));
        let edge = StrategyState {
            display_name: "x".repeat(64),
            overload_rate: 100.0,
            exercises_per_workout: 100,
            target_sets_per_exercise: 10_000,
            target_reps_per_set: 100_000,
            ..plan()
        };
        assert!(resource.validate(&edge).is_ok());
        let low = StrategyState {
            overload_rate: 0.0,
            exercises_per_workout: 1,
            target_sets_per_exercise: 1,
            target_reps_per_set: 1,
            ..plan()
        };
        assert!(resource.validate(&low).is_ok());
    }

    #[test]
    fn every_out_of_range_attribute_is_reported() {
        let resource = StrategyResource::new(session(Scripted::default()));
        let bad = StrategyState {
            display_name: String::new(),
            overload_rate: 100.5,
            exercises_per_workout: 0,
            target_sets_per_exercise: 10_001,
            target_reps_per_set: -1,
            ..plan()
        };
        let err = resource.validate(&bad).unwrap_err();
        assert_eq!(
            attributes(&err),
            vec![
                "display_name",
                "overload_rate",
                "exercises_per_workout",
                "target_sets_per_exercise",
                "target_reps_per_set",
            ]
        );
    }

    #[test]
    fn display_name_length_counts_characters() {
        let resource = StrategyResource::new(session(Scripted::default()));
        let wide = StrategyState {
            display_name: "é".repeat(64),
            ..plan()
        };
        assert!(resource.validate(&wide).is_ok());
        let long = StrategyState {
            display_name: "a".repeat(65),
            ..plan()
        };
        assert_eq!(attributes(&resource.validate(&long).unwrap_err()), vec!["display_name"]);
    }

    #[test]
    fn invalid_plan_sends_no_request() {
        let s = session(Scripted::default().reply(201, LINEAR));
        let resource = StrategyResource::new(Arc::clone(&s));
        let bad = StrategyState {
            overload_rate: -1.0,
            ..plan()
        };
        assert!(resource.create(bad).is_err());
        assert!(s.transport().requests().is_empty());
    }

    #[test]
    fn create_adopts_server_state() {
        let resource = StrategyResource::new(session(Scripted::default().reply(201, LINEAR)));
        let state = resource.create(plan()).unwrap();
        assert_eq!(state.id.as_deref(), Some("3"));
        assert_eq!(state.target_sets_per_exercise, 3);
    }

    #[test]
    fn read_populates_target_sets_from_response() {
        let resource = StrategyResource::new(session(Scripted::default().reply(
            200,
            r#"{"id":3,"display_name":"Linear","overload_rate":5,"exercises_per_workout":4,"target_reps_per_set":8,"target_sets_per_exercise":6}"#,
        )));
        let stale = StrategyState {
            id: Some("3".to_string()),
            target_sets_per_exercise: 3,
            target_reps_per_set: 12,
            ..plan()
        };
        let state = resource.read(stale).unwrap();
        assert_eq!(state.target_sets_per_exercise, 6);
        assert_eq!(state.target_reps_per_set, 8);
    }

    #[test]
    fn read_failure_names_the_id() {
        let resource =
            StrategyResource::new(session(Scripted::default().reply(404, "not found")));
        let err = resource
            .read(StrategyState {
                id: Some("3".to_string()),
                ..plan()
            })
            .unwrap_err();
        let diag = err.iter().next().unwrap();
        assert_eq!(diag.summary, "Error Reading BrickByBrick Strategy");
        assert_eq!(
            diag.detail,
            "Could not read BrickByBrick strategy ID 3: status: 404, body: not found"
        );
    }

    #[test]
    fn delete_missing_strategy_reports_api_error() {
        let resource =
            StrategyResource::new(session(Scripted::default().reply(404, "not found")));
        let state = StrategyState {
            id: Some("3".to_string()),
            ..plan()
        };
        let err = resource.delete(&state).unwrap_err();
        assert_eq!(
            err.iter().next().unwrap().summary,
            "Error Deleting BrickByBrick Strategy"
        );
    }

    #[test]
    fn import_rejects_leading_zero() {
        let resource = StrategyResource::new(session(Scripted::default()));
        assert!(resource.import_state("03").is_err());
        assert_eq!(resource.import_state("3").unwrap().id.as_deref(), Some("3"));
    }
}
