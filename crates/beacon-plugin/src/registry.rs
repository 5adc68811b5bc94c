//! Registry for constructed providers.
//!
//! The registry holds one provider per registered network name. It is not
//! itself thread-safe; wrap it in a synchronization primitive if it must be
//! shared. The providers it stores are `Arc`-wrapped and safe to share.

use beacon_types::{Provider, ProviderError, Result};
use std::{collections::HashMap, fmt, sync::Arc};
use tracing::info;

/// Providers indexed by network name.
pub struct ProviderRegistry {
	providers: HashMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
	/// Creates a new empty registry.
	pub fn new() -> Self {
		Self {
			providers: HashMap::new(),
		}
	}

	/// Registers a provider under its network name.
	///
	/// # Errors
	///
	/// Returns an error if a provider for the same network is already
	/// registered.
	pub fn register(&mut self, provider: Arc<dyn Provider>) -> Result<()> {
		let name = provider.network().name.clone();
		info!(network = %name, "Registering beacon provider");

		if self.providers.contains_key(&name) {
			return Err(ProviderError::Config(format!(
				"Network {:?} already registered",
				name
			)));
		}

		self.providers.insert(name, provider);
		Ok(())
	}

	/// Retrieves the provider for a network, if registered.
	pub fn get(&self, network_name: &str) -> Option<Arc<dyn Provider>> {
		self.providers.get(network_name).cloned()
	}

	/// Retrieves the provider for a network, failing if it is not registered.
	pub fn get_required(&self, network_name: &str) -> Result<Arc<dyn Provider>> {
		self.get(network_name).ok_or_else(|| {
			ProviderError::Config(format!("Network {:?} not configured", network_name))
		})
	}

	/// Returns the registered network names, in no particular order.
	pub fn networks(&self) -> Vec<String> {
		self.providers.keys().cloned().collect()
	}
}

impl Default for ProviderRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for ProviderRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProviderRegistry")
			.field("networks", &self.providers.keys().collect::<Vec<_>>())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use beacon_types::{
		Block, BlockId, ChainId, Gwei, Network, ValidatorId,
	};

	// Mock provider for testing registration only.
	struct MockProvider {
		network: Network,
	}

	impl MockProvider {
		fn for_network(name: &str) -> Arc<Self> {
			Arc::new(Self {
				network: Network::live("beacon", name, ChainId::MAINNET),
			})
		}
	}

	#[async_trait]
	impl Provider for MockProvider {
		fn network(&self) -> &Network {
			&self.network
		}
		async fn connect(&self) -> Result<()> {
			Ok(())
		}
		async fn disconnect(&self) -> Result<()> {
			Ok(())
		}
		async fn update_settings(&self, _settings: toml::Value) -> Result<()> {
			Ok(())
		}
		async fn is_connected(&self) -> Result<bool> {
			Ok(false)
		}
		async fn chain_id(&self) -> Result<ChainId> {
			Err(ProviderError::NotConnected)
		}
		async fn client_version(&self) -> Result<String> {
			Ok(String::new())
		}
		async fn get_block(&self, block_id: BlockId) -> Result<Block> {
			Err(ProviderError::BlockNotFound(block_id.to_string()))
		}
		async fn get_balance(&self, validator: &ValidatorId) -> Result<Gwei> {
			Err(ProviderError::ValidatorNotFound(validator.to_string()))
		}
	}

	#[test]
	fn test_register_and_get() {
		let mut registry = ProviderRegistry::new();
		registry
			.register(MockProvider::for_network("mainnet"))
			.unwrap();

		let provider = registry.get("mainnet").unwrap();
		assert_eq!(provider.network().name, "mainnet");

		assert!(registry.get("goerli").is_none());
	}

	#[test]
	fn test_duplicate_registration_fails() {
		let mut registry = ProviderRegistry::new();
		registry
			.register(MockProvider::for_network("mainnet"))
			.unwrap();

		let result = registry.register(MockProvider::for_network("mainnet"));
		assert!(result.is_err());
	}

	#[test]
	fn test_get_required() {
		let mut registry = ProviderRegistry::new();
		registry
			.register(MockProvider::for_network("mainnet"))
			.unwrap();

		assert!(registry.get_required("mainnet").is_ok());
		assert!(matches!(
			registry.get_required("goerli"),
			Err(ProviderError::Config(_))
		));
	}

	#[test]
	fn test_list_networks() {
		let mut registry = ProviderRegistry::new();
		assert!(registry.networks().is_empty());

		registry
			.register(MockProvider::for_network("mainnet"))
			.unwrap();
		registry
			.register(MockProvider::for_network("goerli"))
			.unwrap();

		let networks = registry.networks();
		assert_eq!(networks.len(), 2);
		assert!(networks.contains(&"mainnet".to_string()));
		assert!(networks.contains(&"goerli".to_string()));
	}
}
