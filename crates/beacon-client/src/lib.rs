//! Thin HTTP client for the Beacon Chain API.
//!
//! This crate owns the wire protocol only: it issues GETs against the
//! standard Beacon API endpoints and deserializes the `data` envelopes
//! defined in `beacon-types`. It performs no consensus logic, no retries,
//! and no response validation beyond JSON decoding; translating missing
//! fields into domain errors is the provider adapter's job.

pub mod http;

pub use http::BeaconHttpClient;

use async_trait::async_trait;
use beacon_types::{
	ApiResponse, BlockId, DepositContractData, ProviderError, SignedBlockData, ValidatorData,
	ValidatorId, VersionData,
};
use thiserror::Error;

/// Errors returned by Beacon API clients.
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("could not parse URL: {0}")]
	Url(#[from] url::ParseError),

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("unexpected status code: {0}")]
	UnexpectedStatus(u16),
}

impl From<ClientError> for ProviderError {
	fn from(err: ClientError) -> Self {
		ProviderError::Network(err.to_string())
	}
}

/// The Beacon API surface the provider adapter depends on.
///
/// Kept as a trait so the adapter can be exercised against an in-memory
/// implementation in tests.
#[async_trait]
pub trait BeaconApi: Send + Sync {
	/// `GET eth/v1/node/version`
	async fn get_version(&self) -> Result<ApiResponse<VersionData>, ClientError>;

	/// `GET eth/v1/node/health`, returning the raw status code.
	async fn get_health(&self) -> Result<u16, ClientError>;

	/// `GET eth/v1/config/deposit_contract`
	async fn get_deposit_contract(&self) -> Result<ApiResponse<DepositContractData>, ClientError>;

	/// `GET eth/v2/beacon/blocks/{block_id}`
	async fn get_block(&self, block_id: &BlockId) -> Result<ApiResponse<SignedBlockData>, ClientError>;

	/// `GET eth/v1/beacon/states/head/validators/{validator_id}`
	async fn get_validator(
		&self,
		validator_id: &ValidatorId,
	) -> Result<ApiResponse<ValidatorData>, ClientError>;
}
