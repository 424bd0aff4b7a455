//! Provider-level configuration.
//!
//! The orchestrator hands over the provider block as JSON. The API key may
//! also come from a fallback value the caller looked up elsewhere (such as
//! the `BRICKBYBRICK_API_KEY` environment variable); an explicit key wins.

use brickbybrick_core::ClientConfig;
use serde::Deserialize;

use crate::diagnostics::{Diagnostic, Diagnostics};

/// Name of the environment variable conventionally used as the fallback key.
pub const API_KEY_ENV: &str = "BRICKBYBRICK_API_KEY";

#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    /// Overrides the hosted API root. Mostly useful against a local server.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ProviderConfig {
    pub fn from_value(value: &serde_json::Value) -> Result<Self, Diagnostics> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(value).map_err(|e| {
            Diagnostic::error(
                "Invalid Provider Configuration",
                format!("The BrickByBrick provider configuration could not be read: {e}"),
            )
            .into()
        })
    }

    /// Resolve the session configuration. `fallback_api_key` is used only
    /// when no explicit key is configured.
    pub fn resolve(&self, fallback_api_key: Option<&str>) -> Result<ClientConfig, Diagnostics> {
        let api_key = self
            .api_key
            .as_deref()
            .or(fallback_api_key)
            .unwrap_or_default();

        if api_key.is_empty() {
            return Err(Diagnostic::attribute_error(
                "api_key",
                "Missing BrickByBrick API Key",
                format!(
                    "The provider cannot create the BrickByBrick API client as there is a missing or empty value for the BrickByBrick API key. \
                     Set the api_key value in the configuration or use the {API_KEY_ENV} environment variable. \
                     If either is already set, ensure the value is not empty."
                ),
            )
            .into());
        }

        let mut config = ClientConfig::new(api_key);
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
