//! Read-only provider adapter over the Beacon Chain HTTP API.
//!
//! `BeaconProvider` implements the host `Provider` trait by forwarding each
//! operation to a [`BeaconApi`] client and translating the loose response
//! envelopes into typed values or domain errors. The provider owns no
//! protocol logic: every method is a one- or two-step forward-and-translate.
//!
//! Lifecycle: constructed disconnected, `connect` acquires the client handle,
//! `disconnect` drops it. The node-derived `chain_id` and `client_version`
//! values are explicit caches cleared on every connect/disconnect transition.

pub mod settings;

pub use settings::{ProviderSettings, DEFAULT_TIMEOUT_SECS};

use async_trait::async_trait;
use beacon_client::{BeaconApi, BeaconHttpClient};
use beacon_types::{
	Block, BlockId, ChainId, Ecosystem, Gwei, Network, Provider, ProviderError, Result,
	ValidatorId,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Provider adapter for Beacon Chain networks.
pub struct BeaconProvider {
	network: Network,
	ecosystem: Arc<dyn Ecosystem>,
	settings: RwLock<ProviderSettings>,
	client: RwLock<Option<Arc<dyn BeaconApi>>>,
	client_version: RwLock<Option<String>>,
	chain_id: RwLock<Option<ChainId>>,
}

impl BeaconProvider {
	/// Creates a disconnected provider. Call [`Provider::connect`] before
	/// issuing queries.
	pub fn new(network: Network, ecosystem: Arc<dyn Ecosystem>, settings: ProviderSettings) -> Self {
		Self {
			network,
			ecosystem,
			settings: RwLock::new(settings),
			client: RwLock::new(None),
			client_version: RwLock::new(None),
			chain_id: RwLock::new(None),
		}
	}

	/// Creates a provider around an existing client handle instead of one
	/// built from the settings. Used for custom transports and tests.
	pub fn with_client(
		network: Network,
		ecosystem: Arc<dyn Ecosystem>,
		settings: ProviderSettings,
		client: Arc<dyn BeaconApi>,
	) -> Self {
		Self {
			network,
			ecosystem,
			settings: RwLock::new(settings),
			client: RwLock::new(Some(client)),
			client_version: RwLock::new(None),
			chain_id: RwLock::new(None),
		}
	}

	/// A snapshot of the current connection settings.
	pub async fn settings(&self) -> ProviderSettings {
		self.settings.read().await.clone()
	}

	async fn client(&self) -> Result<Arc<dyn BeaconApi>> {
		self.client
			.read()
			.await
			.clone()
			.ok_or(ProviderError::NotConnected)
	}

	async fn clear_caches(&self) {
		*self.client_version.write().await = None;
		*self.chain_id.write().await = None;
	}
}

#[async_trait]
impl Provider for BeaconProvider {
	fn network(&self) -> &Network {
		&self.network
	}

	async fn connect(&self) -> Result<()> {
		let settings = self.settings.read().await.clone();
		let client = BeaconHttpClient::with_timeout(
			&settings.uri,
			Duration::from_secs(settings.timeout_secs),
		)
		.map_err(|e| {
			ProviderError::Config(format!("invalid beacon endpoint {:?}: {}", settings.uri, e))
		})?;

		*self.client.write().await = Some(Arc::new(client));
		self.clear_caches().await;
		info!(network = %self.network.name, uri = %settings.uri, "Connected beacon provider");
		Ok(())
	}

	async fn disconnect(&self) -> Result<()> {
		*self.client.write().await = None;
		self.clear_caches().await;
		info!(network = %self.network.name, "Disconnected beacon provider");
		Ok(())
	}

	async fn update_settings(&self, settings: toml::Value) -> Result<()> {
		self.disconnect().await?;
		self.settings.write().await.merge(&settings)?;
		// No partial-failure handling: a reconnect failure propagates as is.
		self.connect().await
	}

	async fn is_connected(&self) -> Result<bool> {
		let client = match self.client.read().await.clone() {
			Some(client) => client,
			None => return Ok(false),
		};

		let status = client.get_health().await?;
		Ok(status == 200)
	}

	async fn chain_id(&self) -> Result<ChainId> {
		if let Some(chain_id) = *self.chain_id.read().await {
			return Ok(chain_id);
		}

		// Live networks carry a hardcoded chain ID to fall back on when the
		// node cannot be asked; fork and local networks never do.
		let fallback = self.network.static_chain_id();

		let resp = match self.client().await {
			Ok(client) => client.get_deposit_contract().await?,
			Err(ProviderError::NotConnected) => {
				let chain_id = fallback.ok_or(ProviderError::NotConnected)?;
				*self.chain_id.write().await = Some(chain_id);
				return Ok(chain_id);
			}
			Err(err) => return Err(err),
		};

		let chain_id = match resp.data.and_then(|data| data.chain_id) {
			Some(raw) => {
				let id = raw.parse::<u64>().map_err(|e| {
					ProviderError::Decode(format!("invalid chain id {:?}: {}", raw, e))
				})?;
				ChainId(id)
			}
			None => fallback.ok_or(ProviderError::NotConnected)?,
		};

		*self.chain_id.write().await = Some(chain_id);
		Ok(chain_id)
	}

	async fn client_version(&self) -> Result<String> {
		let client = match self.client().await {
			Ok(client) => client,
			Err(_) => return Ok(String::new()),
		};

		if let Some(version) = self.client_version.read().await.clone() {
			return Ok(version);
		}

		let resp = client.get_version().await?;
		let Some(version) = resp.data.and_then(|data| data.version) else {
			return Ok(String::new());
		};

		*self.client_version.write().await = Some(version.clone());
		Ok(version)
	}

	async fn get_block(&self, block_id: BlockId) -> Result<Block> {
		let client = self.client().await?;
		debug!(network = %self.network.name, block_id = %block_id, "Fetching block");

		let resp = client.get_block(&block_id).await?;
		let message = resp
			.data
			.and_then(|data| data.message)
			.ok_or_else(|| ProviderError::BlockNotFound(block_id.to_string()))?;

		// Decoding the raw payload belongs to the ecosystem, not the provider.
		self.ecosystem.decode_block(&message)
	}

	async fn get_balance(&self, validator: &ValidatorId) -> Result<Gwei> {
		let client = self.client().await?;
		debug!(network = %self.network.name, validator = %validator, "Fetching validator balance");

		let resp = client.get_validator(validator).await?;
		let balance = resp
			.data
			.and_then(|data| data.balance)
			.ok_or_else(|| ProviderError::ValidatorNotFound(validator.to_string()))?;

		// Returned as reported by the node, in gwei. No unit conversion.
		balance
			.parse::<Gwei>()
			.map_err(|e| ProviderError::Decode(format!("invalid balance {:?}: {}", balance, e)))
	}
}
