//! Decoded beacon block types.
//!
//! These are the host-facing shapes produced by an ecosystem's block decoding
//! routine; the stringly-typed wire format lives in [`crate::api`].

use crate::common::{Root, Slot, ValidatorIndex};
use serde::{Deserialize, Serialize};

/// A decoded beacon block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
	pub slot: Slot,
	pub proposer_index: ValidatorIndex,
	pub parent_root: Root,
	pub state_root: Root,
	pub body: BlockBody,
}

/// Decoded subset of the beacon block body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockBody {
	/// Proposer graffiti, a fixed 32-byte field.
	pub graffiti: Option<Root>,
	pub eth1_data: Option<Eth1Data>,
}

/// Execution-layer deposit data carried in the block body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eth1Data {
	pub deposit_root: Root,
	pub deposit_count: u64,
	pub block_hash: Root,
}
