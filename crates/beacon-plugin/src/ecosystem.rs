//! The beacon ecosystem definition.

use beacon_types::{
	Block, BlockBody, BlockMessage, Ecosystem, Eth1Data, ProviderError, RawEth1Data, Result, Root,
};

use crate::networks::ECOSYSTEM_NAME;

/// Ecosystem for Beacon Chain networks.
///
/// Owns the decoding of raw wire-format block messages into typed blocks.
/// Required header fields must be present and well-formed; body fields are
/// decoded when present and an error only if present but malformed.
pub struct Beacon;

impl Ecosystem for Beacon {
	fn name(&self) -> &str {
		ECOSYSTEM_NAME
	}

	fn decode_block(&self, message: &BlockMessage) -> Result<Block> {
		let body = match &message.body {
			Some(raw) => BlockBody {
				graffiti: raw
					.graffiti
					.as_deref()
					.map(|g| g.parse::<Root>())
					.transpose()?,
				eth1_data: raw
					.eth1_data
					.as_ref()
					.map(decode_eth1_data)
					.transpose()?,
			},
			None => BlockBody::default(),
		};

		Ok(Block {
			slot: required_u64("slot", message.slot.as_deref())?,
			proposer_index: required_u64("proposer_index", message.proposer_index.as_deref())?,
			parent_root: required_root("parent_root", message.parent_root.as_deref())?,
			state_root: required_root("state_root", message.state_root.as_deref())?,
			body,
		})
	}
}

fn decode_eth1_data(raw: &RawEth1Data) -> Result<Eth1Data> {
	Ok(Eth1Data {
		deposit_root: required_root("eth1_data.deposit_root", raw.deposit_root.as_deref())?,
		deposit_count: required_u64("eth1_data.deposit_count", raw.deposit_count.as_deref())?,
		block_hash: required_root("eth1_data.block_hash", raw.block_hash.as_deref())?,
	})
}

fn required_u64(field: &str, value: Option<&str>) -> Result<u64> {
	let raw = value
		.ok_or_else(|| ProviderError::Decode(format!("block message missing {}", field)))?;
	raw.parse()
		.map_err(|e| ProviderError::Decode(format!("invalid {} {:?}: {}", field, raw, e)))
}

fn required_root(field: &str, value: Option<&str>) -> Result<Root> {
	let raw = value
		.ok_or_else(|| ProviderError::Decode(format!("block message missing {}", field)))?;
	raw.parse()
		.map_err(|_| ProviderError::Decode(format!("invalid {} {:?}", field, raw)))
}
