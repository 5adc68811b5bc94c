//! Plugin configuration loading.
//!
//! Configuration is a TOML file with `${VAR}` environment substitution and a
//! small set of `BEACON_`-prefixed environment overrides applied after
//! parsing.

pub mod types;

pub use types::{BeaconConfig, NetworkSettings};

use beacon_types::{FORK_SUFFIX, LOCAL_NETWORK_NAME};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Configuration loader with environment variable substitution
#[derive(Default)]
pub struct ConfigLoader {
	file_path: Option<String>,
	env_prefix: String,
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			env_prefix: "BEACON_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_string_lossy().to_string());
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	pub async fn load(&self) -> Result<BeaconConfig, ConfigError> {
		let mut config = if let Some(file_path) = &self.file_path {
			self.load_from_file(file_path).await?
		} else {
			return Err(ConfigError::FileNotFound(
				"No configuration file specified".to_string(),
			));
		};

		self.apply_env_overrides(&mut config)?;
		self.validate_config(&config)?;

		Ok(config)
	}

	async fn load_from_file(&self, file_path: &str) -> Result<BeaconConfig, ConfigError> {
		let content = tokio::fs::read_to_string(file_path).await?;
		debug!(path = file_path, "Loaded beacon plugin configuration");

		let substituted_content = self.substitute_env_vars(&content)?;

		let config: BeaconConfig = toml::from_str(&substituted_content)
			.map_err(|e| ConfigError::ParseError(e.to_string()))?;

		Ok(config)
	}

	fn substitute_env_vars(&self, content: &str) -> Result<String, ConfigError> {
		let mut result = content.to_string();

		// Find and replace ${VAR_NAME} patterns
		let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

		for cap in re.captures_iter(content) {
			let full_match = &cap[0];
			let var_name = &cap[1];

			let env_value = env::var(var_name)
				.map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;

			result = result.replace(full_match, &env_value);
		}

		Ok(result)
	}

	fn apply_env_overrides(&self, config: &mut BeaconConfig) -> Result<(), ConfigError> {
		if let Ok(default_network) = env::var(format!("{}DEFAULT_NETWORK", self.env_prefix)) {
			config.default_network = default_network;
		}

		Ok(())
	}

	fn validate_config(&self, config: &BeaconConfig) -> Result<(), ConfigError> {
		// The default may be a configured network, a fork variant of one, or
		// the local network.
		let default = &config.default_network;
		let known = default == LOCAL_NETWORK_NAME
			|| config.networks.contains_key(default)
			|| default
				.strip_suffix(FORK_SUFFIX)
				.is_some_and(|base| config.networks.contains_key(base));
		if !known {
			return Err(ConfigError::ValidationError(format!(
				"Default network {:?} is not configured",
				config.default_network
			)));
		}

		for (name, settings) in &config.networks {
			if !settings.uri.starts_with("http://") && !settings.uri.starts_with("https://") {
				return Err(ConfigError::ValidationError(format!(
					"Network {:?} URI must start with http:// or https://",
					name
				)));
			}
			if settings.timeout_secs == Some(0) {
				return Err(ConfigError::ValidationError(format!(
					"Network {:?} timeout_secs must be at least 1",
					name
				)));
			}
		}

		Ok(())
	}
}
