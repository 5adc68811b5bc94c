//! Raw Beacon API response shapes.
//!
//! The Beacon API wraps every payload in a `data` envelope and encodes numbers
//! as decimal strings. These structs mirror that wire format with explicit
//! optional fields, so a missing key deserializes to `None` instead of a parse
//! error and the adapter can translate absence into the matching domain error
//! at the boundary.

use serde::{Deserialize, Serialize};

/// The `{"data": ...}` envelope returned by every Beacon API endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
	pub data: Option<T>,
}

impl<T> Default for ApiResponse<T> {
	fn default() -> Self {
		Self { data: None }
	}
}

/// Payload of `GET eth/v1/node/version`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionData {
	#[serde(default)]
	pub version: Option<String>,
}

/// Payload of `GET eth/v1/config/deposit_contract`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositContractData {
	/// Execution chain ID, encoded as a decimal string.
	#[serde(default)]
	pub chain_id: Option<String>,
	#[serde(default)]
	pub address: Option<String>,
}

/// Payload of `GET eth/v2/beacon/blocks/{block_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedBlockData {
	#[serde(default)]
	pub message: Option<BlockMessage>,
	#[serde(default)]
	pub signature: Option<String>,
}

/// The unsigned block message, still in wire encoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockMessage {
	#[serde(default)]
	pub slot: Option<String>,
	#[serde(default)]
	pub proposer_index: Option<String>,
	#[serde(default)]
	pub parent_root: Option<String>,
	#[serde(default)]
	pub state_root: Option<String>,
	#[serde(default)]
	pub body: Option<RawBlockBody>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBlockBody {
	#[serde(default)]
	pub graffiti: Option<String>,
	#[serde(default)]
	pub eth1_data: Option<RawEth1Data>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEth1Data {
	#[serde(default)]
	pub deposit_root: Option<String>,
	#[serde(default)]
	pub deposit_count: Option<String>,
	#[serde(default)]
	pub block_hash: Option<String>,
}

/// Payload of `GET eth/v1/beacon/states/head/validators/{validator_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorData {
	#[serde(default)]
	pub index: Option<String>,
	#[serde(default)]
	pub status: Option<String>,
	/// Current balance in gwei, encoded as a decimal string.
	#[serde(default)]
	pub balance: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_data_key_deserializes_to_none() {
		let resp: ApiResponse<VersionData> = serde_json::from_str("{}").unwrap();
		assert!(resp.data.is_none());
	}

	// The client decodes envelopes through a bare DeserializeOwned bound, and
	// none of the payload types implement Default. The envelope must not
	// require more than the payload's Deserialize impl.
	fn decode<T: serde::de::DeserializeOwned>(raw: &str) -> ApiResponse<T> {
		serde_json::from_str(raw).unwrap()
	}

	#[test]
	fn test_envelope_decodes_behind_a_generic_bound() {
		let resp: ApiResponse<ValidatorData> = decode("{}");
		assert!(resp.data.is_none());

		let resp: ApiResponse<VersionData> = decode(r#"{"data": {"version": "teku/v23.6.0"}}"#);
		assert_eq!(resp.data.unwrap().version.as_deref(), Some("teku/v23.6.0"));
	}

	#[test]
	fn test_version_response() {
		let resp: ApiResponse<VersionData> =
			serde_json::from_str(r#"{"data": {"version": "Lighthouse/v4.5.0"}}"#).unwrap();
		assert_eq!(
			resp.data.unwrap().version.as_deref(),
			Some("Lighthouse/v4.5.0")
		);
	}

	#[test]
	fn test_deposit_contract_chain_id_is_a_string() {
		let resp: ApiResponse<DepositContractData> = serde_json::from_str(
			r#"{"data": {"chain_id": "1", "address": "0x00000000219ab540356cbb839cbe05303d7705fa"}}"#,
		)
		.unwrap();
		assert_eq!(resp.data.unwrap().chain_id.as_deref(), Some("1"));
	}

	#[test]
	fn test_block_response_tolerates_extra_fields() {
		let raw = r#"{
			"version": "deneb",
			"data": {
				"message": {
					"slot": "7",
					"proposer_index": "1024",
					"parent_root": "0x0101010101010101010101010101010101010101010101010101010101010101",
					"state_root": "0x0202020202020202020202020202020202020202020202020202020202020202",
					"body": {
						"randao_reveal": "0xdead",
						"graffiti": "0x0303030303030303030303030303030303030303030303030303030303030303",
						"eth1_data": {
							"deposit_root": "0x0404040404040404040404040404040404040404040404040404040404040404",
							"deposit_count": "99",
							"block_hash": "0x0505050505050505050505050505050505050505050505050505050505050505"
						}
					}
				},
				"signature": "0xbeef"
			}
		}"#;
		let resp: ApiResponse<SignedBlockData> = serde_json::from_str(raw).unwrap();
		let message = resp.data.unwrap().message.unwrap();
		assert_eq!(message.slot.as_deref(), Some("7"));
		assert_eq!(message.proposer_index.as_deref(), Some("1024"));
		let eth1 = message.body.unwrap().eth1_data.unwrap();
		assert_eq!(eth1.deposit_count.as_deref(), Some("99"));
	}

	#[test]
	fn test_block_response_without_message() {
		let resp: ApiResponse<SignedBlockData> =
			serde_json::from_str(r#"{"data": {"signature": "0xbeef"}}"#).unwrap();
		assert!(resp.data.unwrap().message.is_none());
	}

	#[test]
	fn test_validator_response_without_balance() {
		let resp: ApiResponse<ValidatorData> =
			serde_json::from_str(r#"{"data": {"index": "42", "status": "active_ongoing"}}"#)
				.unwrap();
		let data = resp.data.unwrap();
		assert_eq!(data.index.as_deref(), Some("42"));
		assert!(data.balance.is_none());
	}
}
