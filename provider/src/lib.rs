//! Provider glue for the BrickByBrick fitness API.
//!
//! # Overview
//! Maps orchestrator state models onto `brickbybrick-core` calls: two
//! resources (`brickbybrick_exercise`, `brickbybrick_strategy`) and two
//! data sources (`brickbybrick_exercises`, `brickbybrick_strategies`).
//!
//! # Design
//! - Every resource and data source shares one `Arc<Session>` created by
//!   [`Provider::configure`].
//! - Failures are reported as [`Diagnostics`]; client error text is embedded
//!   verbatim in each detail message.
//! - Plan validation runs before any request is sent.
//! - Hosting the plugin protocol is left to the caller.

pub mod config;
pub mod data_source;
pub mod diagnostics;
pub mod exercise;
pub mod provider;
pub mod resource;
pub mod strategy;

#[cfg(test)]
mod testing;

pub use config::{ProviderConfig, API_KEY_ENV};
pub use data_source::{
    ExerciseModel, ExercisesDataSource, ExercisesState, StrategiesDataSource, StrategiesState,
    StrategyModel,
};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use exercise::{ExerciseResource, ExerciseState, DEFAULT_EXERCISE_WEIGHT};
pub use provider::{Provider, DATA_SOURCE_TYPES, PROVIDER_TYPE_NAME, RESOURCE_TYPES};
pub use resource::{DataSource, Resource};
pub use strategy::{StrategyResource, StrategyState};
