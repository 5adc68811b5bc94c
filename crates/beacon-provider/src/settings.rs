//! Provider settings and their merge semantics.

use beacon_types::{ProviderError, Result};
use serde::{Deserialize, Serialize};

/// Default request timeout handed to the HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a beacon provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
	/// Base URI of the Beacon API node, e.g. `http://localhost:5052`.
	pub uri: String,
	/// Request timeout in seconds, applied by the HTTP client.
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
	DEFAULT_TIMEOUT_SECS
}

impl ProviderSettings {
	pub fn new(uri: impl Into<String>) -> Self {
		Self {
			uri: uri.into(),
			timeout_secs: DEFAULT_TIMEOUT_SECS,
		}
	}

	/// Builds settings from a loosely-typed TOML table. `uri` is required.
	pub fn from_toml(config: &toml::Value) -> Result<Self> {
		let uri = config
			.get("uri")
			.and_then(|v| v.as_str())
			.ok_or_else(|| ProviderError::Config("uri is required".to_string()))?;

		let mut settings = Self::new(uri);
		if let Some(value) = config.get("timeout_secs") {
			settings.timeout_secs = as_timeout(value)?;
		}
		Ok(settings)
	}

	/// Merges known keys from `patch` into these settings.
	///
	/// Unknown keys are ignored; a known key with the wrong type is a
	/// configuration error.
	pub fn merge(&mut self, patch: &toml::Value) -> Result<()> {
		if let Some(value) = patch.get("uri") {
			self.uri = value
				.as_str()
				.ok_or_else(|| ProviderError::Config("uri must be a string".to_string()))?
				.to_string();
		}
		if let Some(value) = patch.get("timeout_secs") {
			self.timeout_secs = as_timeout(value)?;
		}
		Ok(())
	}
}

fn as_timeout(value: &toml::Value) -> Result<u64> {
	let secs = value
		.as_integer()
		.ok_or_else(|| ProviderError::Config("timeout_secs must be an integer".to_string()))?;
	if secs < 1 {
		return Err(ProviderError::Config(
			"timeout_secs must be at least 1".to_string(),
		));
	}
	Ok(secs as u64)
}
