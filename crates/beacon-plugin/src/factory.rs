//! Provider construction from configuration.

use crate::ecosystem::Beacon;
use crate::networks::find_network;
use crate::registry::ProviderRegistry;
use beacon_config::BeaconConfig;
use beacon_provider::{BeaconProvider, ProviderSettings};
use beacon_types::{
	ConfigSchema, Field, FieldType, Provider, ProviderError, Result, Schema, ValidationError,
};
use std::sync::Arc;

/// Configuration schema for beacon providers.
pub struct BeaconProviderSchema;

impl ConfigSchema for BeaconProviderSchema {
	fn validate(&self, config: &toml::Value) -> std::result::Result<(), ValidationError> {
		let schema = Schema::new(
			// Required fields
			vec![Field::new("uri", FieldType::String).with_validator(|value| {
				let uri = value.as_str().unwrap();
				if uri.starts_with("http://") || uri.starts_with("https://") {
					Ok(())
				} else {
					Err("URI must start with http:// or https://".to_string())
				}
			})],
			// Optional fields
			vec![Field::new(
				"timeout_secs",
				FieldType::Integer {
					min: Some(1),
					max: None,
				},
			)],
		);

		schema.validate(config)
	}
}

/// Creates a disconnected provider for a registered network from raw TOML
/// settings. The caller connects it when ready.
pub fn create_beacon_provider(
	network_name: &str,
	config: &toml::Value,
) -> Result<Arc<dyn Provider>> {
	let network = find_network(network_name)
		.ok_or_else(|| ProviderError::Config(format!("Unknown network: {:?}", network_name)))?;

	BeaconProviderSchema
		.validate(config)
		.map_err(|e| ProviderError::Config(e.to_string()))?;

	let settings = ProviderSettings::from_toml(config)?;
	Ok(Arc::new(BeaconProvider::new(
		network,
		Arc::new(Beacon),
		settings,
	)))
}

/// Builds a registry with one disconnected provider per configured network.
pub fn registry_from_config(config: &BeaconConfig) -> Result<ProviderRegistry> {
	let mut registry = ProviderRegistry::new();

	for (name, network_settings) in &config.networks {
		let network = find_network(name)
			.ok_or_else(|| ProviderError::Config(format!("Unknown network: {:?}", name)))?;

		let mut settings = ProviderSettings::new(&network_settings.uri);
		if let Some(timeout_secs) = network_settings.timeout_secs {
			settings.timeout_secs = timeout_secs;
		}

		registry.register(Arc::new(BeaconProvider::new(
			network,
			Arc::new(Beacon),
			settings,
		)))?;
	}

	Ok(registry)
}
