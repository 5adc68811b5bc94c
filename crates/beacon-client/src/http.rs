//! reqwest-backed Beacon API client.

use crate::{BeaconApi, ClientError};
use async_trait::async_trait;
use beacon_types::{
	ApiResponse, BlockId, DepositContractData, SignedBlockData, ValidatorData, ValidatorId,
	VersionData,
};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// HTTP Beacon API client.
///
/// Request timeouts belong to the underlying `reqwest::Client`; nothing above
/// this layer manages deadlines or cancellation.
pub struct BeaconHttpClient {
	http: reqwest::Client,
	endpoint: Url,
}

impl BeaconHttpClient {
	/// Creates a client with reqwest's default timeout behavior.
	pub fn new(endpoint: &str) -> Result<Self, ClientError> {
		Ok(Self {
			http: reqwest::Client::new(),
			endpoint: normalize_endpoint(endpoint)?,
		})
	}

	/// Creates a client whose requests time out after `timeout`.
	pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self, ClientError> {
		let http = reqwest::Client::builder().timeout(timeout).build()?;
		Ok(Self {
			http,
			endpoint: normalize_endpoint(endpoint)?,
		})
	}

	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	async fn http_get<T: serde::de::DeserializeOwned>(
		&self,
		path: &str,
	) -> Result<ApiResponse<T>, ClientError> {
		let target = self.endpoint.join(path)?;
		tracing::debug!(url = %target, "Beacon API request");
		let resp = self.http.get(target).send().await?;

		// Unknown blocks and validators come back as 404 with an error body;
		// surface that as an empty envelope so the adapter can raise the
		// matching not-found error.
		if resp.status() == StatusCode::NOT_FOUND {
			return Ok(ApiResponse::default());
		}

		let status = resp.status();
		if !status.is_success() {
			return Err(ClientError::UnexpectedStatus(status.as_u16()));
		}

		Ok(resp.json().await?)
	}
}

/// Parses the endpoint and guarantees a trailing slash so `Url::join` keeps
/// any path prefix the node is served under.
fn normalize_endpoint(endpoint: &str) -> Result<Url, ClientError> {
	if endpoint.ends_with('/') {
		Ok(Url::parse(endpoint)?)
	} else {
		Ok(Url::parse(&format!("{}/", endpoint))?)
	}
}

#[async_trait]
impl BeaconApi for BeaconHttpClient {
	async fn get_version(&self) -> Result<ApiResponse<VersionData>, ClientError> {
		self.http_get("eth/v1/node/version").await
	}

	async fn get_health(&self) -> Result<u16, ClientError> {
		let target = self.endpoint.join("eth/v1/node/health")?;
		let resp = self.http.get(target).send().await?;
		Ok(resp.status().as_u16())
	}

	async fn get_deposit_contract(&self) -> Result<ApiResponse<DepositContractData>, ClientError> {
		self.http_get("eth/v1/config/deposit_contract").await
	}

	#[tracing::instrument(skip(self), fields(block_id = %block_id))]
	async fn get_block(
		&self,
		block_id: &BlockId,
	) -> Result<ApiResponse<SignedBlockData>, ClientError> {
		let path = format!("eth/v2/beacon/blocks/{}", block_id);
		self.http_get(&path).await
	}

	#[tracing::instrument(skip(self), fields(validator_id = %validator_id))]
	async fn get_validator(
		&self,
		validator_id: &ValidatorId,
	) -> Result<ApiResponse<ValidatorData>, ClientError> {
		let path = format!("eth/v1/beacon/states/head/validators/{}", validator_id);
		self.http_get(&path).await
	}
}
