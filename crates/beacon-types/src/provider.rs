//! Provider and ecosystem traits.

use crate::api::BlockMessage;
use crate::blocks::Block;
use crate::common::{BlockId, ChainId, Gwei, Transaction, ValidatorId};
use crate::errors::{ProviderError, Result};
use crate::networks::Network;
use async_trait::async_trait;

/// An ecosystem groups networks that share encoding rules.
///
/// Its single substantive job here is turning a raw wire-format block message
/// into the host-facing [`Block`].
pub trait Ecosystem: Send + Sync {
	fn name(&self) -> &str;

	/// Decodes a raw block message into a typed block.
	fn decode_block(&self, message: &BlockMessage) -> Result<Block>;
}

/// The host framework's provider surface.
///
/// Beacon providers are read-only: the write, fee, and tracing operations
/// carry default implementations that fail with
/// [`ProviderError::NotImplemented`] regardless of connection state. A
/// concrete provider overrides only what it can actually serve.
#[async_trait]
pub trait Provider: Send + Sync {
	/// The network this provider was constructed for.
	fn network(&self) -> &Network;

	/// Acquires a client handle using the current settings.
	async fn connect(&self) -> Result<()>;

	/// Drops the client handle and clears any cached node-derived values.
	async fn disconnect(&self) -> Result<()>;

	/// Disconnects, merges `settings` into the provider configuration, and
	/// reconnects. A failure during reconnect propagates uncaught.
	async fn update_settings(&self, settings: toml::Value) -> Result<()>;

	/// True iff a health check against the node succeeds. Always false
	/// before the first successful `connect`.
	async fn is_connected(&self) -> Result<bool>;

	async fn chain_id(&self) -> Result<ChainId>;

	/// The node's advertised client version, or an empty string when it is
	/// unavailable.
	async fn client_version(&self) -> Result<String>;

	async fn get_block(&self, block_id: BlockId) -> Result<Block>;

	/// The balance of a validator in gwei, as reported by the node.
	async fn get_balance(&self, validator: &ValidatorId) -> Result<Gwei>;

	async fn base_fee(&self) -> Result<u64> {
		Err(ProviderError::NotImplemented("base_fee"))
	}

	async fn max_gas(&self) -> Result<u64> {
		Err(ProviderError::NotImplemented("max_gas"))
	}

	async fn gas_price(&self) -> Result<u64> {
		Err(ProviderError::NotImplemented("gas_price"))
	}

	async fn priority_fee(&self) -> Result<u64> {
		Err(ProviderError::NotImplemented("priority_fee"))
	}

	async fn supports_tracing(&self) -> Result<bool> {
		Err(ProviderError::NotImplemented("supports_tracing"))
	}

	async fn estimate_gas_cost(&self, _txn: &Transaction) -> Result<u64> {
		Err(ProviderError::NotImplemented("estimate_gas_cost"))
	}

	async fn get_nonce(&self, _address: &str) -> Result<u64> {
		Err(ProviderError::NotImplemented("get_nonce"))
	}
}
