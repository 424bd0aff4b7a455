//! Provider entry point: turns configuration into a shared session and hands
//! out resources and data sources bound to it.

use std::sync::Arc;

use brickbybrick_core::{Session, Transport, UreqTransport};
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::data_source::{ExercisesDataSource, StrategiesDataSource};
use crate::diagnostics::Diagnostics;
use crate::exercise::ExerciseResource;
use crate::strategy::StrategyResource;

pub const PROVIDER_TYPE_NAME: &str = "brickbybrick";

/// Resource type names, fully qualified.
pub const RESOURCE_TYPES: [&str; 2] = ["brickbybrick_exercise", "brickbybrick_strategy"];

/// Data source type names, fully qualified.
pub const DATA_SOURCE_TYPES: [&str; 2] = ["brickbybrick_exercises", "brickbybrick_strategies"];

#[derive(Debug)]
pub struct Provider<T = UreqTransport> {
    version: String,
    session: Arc<Session<T>>,
}

impl Provider<UreqTransport> {
    /// Build the provider from its JSON configuration block.
    ///
    /// `fallback_api_key` is consulted only when the block has no `api_key`.
    pub fn configure(
        version: &str,
        config: &serde_json::Value,
        fallback_api_key: Option<&str>,
    ) -> Result<Self, Diagnostics> {
        info!("configuring BrickByBrick client");
        let client_config = ProviderConfig::from_value(config)?.resolve(fallback_api_key)?;
        debug!(base_url = client_config.base_url(), "creating BrickByBrick client");
        let provider = Self::with_session(version, Session::new(client_config));
        info!(success = true, "configured BrickByBrick client");
        Ok(provider)
    }
}

impl<T: Transport> Provider<T> {
    pub fn with_session(version: &str, session: Session<T>) -> Self {
        Self {
            version: version.to_string(),
            session: Arc::new(session),
        }
    }

    pub fn type_name(&self) -> &'static str {
        PROVIDER_TYPE_NAME
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn session(&self) -> &Arc<Session<T>> {
        &self.session
    }

    pub fn exercise_resource(&self) -> ExerciseResource<T> {
        ExerciseResource::new(Arc::clone(&self.session))
    }

    pub fn strategy_resource(&self) -> StrategyResource<T> {
        StrategyResource::new(Arc::clone(&self.session))
    }

    pub fn exercises_data_source(&self) -> ExercisesDataSource<T> {
        ExercisesDataSource::new(Arc::clone(&self.session))
    }

    pub fn strategies_data_source(&self) -> StrategiesDataSource<T> {
        StrategiesDataSource::new(Arc::clone(&self.session))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::resource::{DataSource, Resource};

    #[test]
    fn configure_builds_session_from_explicit_key() {
        let provider = Provider::configure("test", &json!({"api_key": "abc"}), None).unwrap();
        assert_eq!(provider.type_name(), "brickbybrick");
        assert_eq!(provider.version(), "test");
        assert_eq!(provider.session().config().token(), "abc");
    }

    #[test]
    fn configure_without_any_key_fails() {
        let err = Provider::configure("test", &json!({}), None).unwrap_err();
        assert!(err.has_error());
    }

    #[test]
    fn type_names_match_registered_lists() {
        let provider = Provider::configure("dev", &json!(null), Some("k")).unwrap();
        let resources = [
            provider.exercise_resource().type_name_suffix(),
            provider.strategy_resource().type_name_suffix(),
        ];
        let data_sources = [
            provider.exercises_data_source().type_name_suffix(),
            provider.strategies_data_source().type_name_suffix(),
        ];
        for (suffix, full) in resources.iter().zip(RESOURCE_TYPES) {
            assert_eq!(format!("{PROVIDER_TYPE_NAME}{suffix}"), full);
        }
        for (suffix, full) in data_sources.iter().zip(DATA_SOURCE_TYPES) {
            assert_eq!(format!("{PROVIDER_TYPE_NAME}{suffix}"), full);
        }
    }
}
