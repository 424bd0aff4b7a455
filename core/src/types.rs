//! Domain DTOs for the fitness API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Each entity kind implements [`Entity`], which names its collection path
//! segment and its payload type. The client is generic over that trait, so
//! adding a kind means adding a struct, not another set of request methods.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ParseIdError;

/// Server-assigned identifier.
///
/// A JSON integer on the wire. At the client boundary it is a canonical
/// decimal string: digits only, no sign, no leading zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| ParseIdError {
            input: s.to_string(),
            reason,
        };
        if s.is_empty() {
            return Err(fail("empty"));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(fail("not a decimal integer"));
        }
        if s.len() > 1 && s.starts_with('0') {
            return Err(fail("leading zero"));
        }
        s.parse::<u64>().map(Self).map_err(|_| fail("out of range"))
    }
}

/// A remotely persisted record addressable under `/api/<COLLECTION>`.
pub trait Entity: DeserializeOwned {
    /// Path segment of the collection, e.g. `exercises`.
    const COLLECTION: &'static str;

    /// Fields sent on create and update.
    type Payload: Serialize;

    fn id(&self) -> EntityId;
}

/// An exercise returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: EntityId,
    pub name: String,
    /// Starting weight in lbs.
    pub default_weight: f32,
}

/// Request payload for creating or replacing an exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExercisePayload {
    pub name: String,
    pub default_weight: f32,
}

impl Entity for Exercise {
    const COLLECTION: &'static str = "exercises";
    type Payload = ExercisePayload;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl From<&Exercise> for ExercisePayload {
    fn from(exercise: &Exercise) -> Self {
        Self {
            name: exercise.name.clone(),
            default_weight: exercise.default_weight,
        }
    }
}

/// A progressive overload strategy returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Strategy {
    pub id: EntityId,
    pub display_name: String,
    /// Weight in lbs added to each rep per session.
    pub overload_rate: f32,
    pub exercises_per_workout: i32,
    pub target_reps_per_set: i32,
    pub target_sets_per_exercise: i32,
}

/// Request payload for creating or replacing a strategy. Same fields as
/// [`Strategy`] minus the server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyPayload {
    pub display_name: String,
    pub overload_rate: f32,
    pub exercises_per_workout: i32,
    pub target_reps_per_set: i32,
    pub target_sets_per_exercise: i32,
}

impl Entity for Strategy {
    const COLLECTION: &'static str = "strategies";
    type Payload = StrategyPayload;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl From<&Strategy> for StrategyPayload {
    fn from(strategy: &Strategy) -> Self {
        Self {
            display_name: strategy.display_name.clone(),
            overload_rate: strategy.overload_rate,
            exercises_per_workout: strategy.exercises_per_workout,
            target_reps_per_set: strategy.target_reps_per_set,
            target_sets_per_exercise: strategy.target_sets_per_exercise,
        }
    }
}
