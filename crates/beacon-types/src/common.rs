//! Common identifiers used throughout the beacon provider.

use crate::errors::ProviderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Beacon chain slot number.
pub type Slot = u64;

/// Beacon chain epoch number.
pub type Epoch = u64;

/// Balance denominated in gwei, as reported by the Beacon API.
pub type Gwei = u64;

/// Index of a validator in the beacon state registry.
pub type ValidatorIndex = u64;

/// Chain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl ChainId {
	pub const MAINNET: Self = Self(1);
	pub const GOERLI: Self = Self(5);
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for ChainId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Ok(ChainId(s.parse()?))
	}
}

/// A 32-byte hash root, rendered as 0x-prefixed hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Root(pub [u8; 32]);

impl Root {
	pub fn zero() -> Self {
		Self([0u8; 32])
	}

	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}
}

impl fmt::Display for Root {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{}", hex::encode(self.0))
	}
}

impl FromStr for Root {
	type Err = ProviderError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let stripped = s.strip_prefix("0x").unwrap_or(s);
		let bytes = hex::decode(stripped)
			.map_err(|e| ProviderError::Decode(format!("invalid root hex {:?}: {}", s, e)))?;
		if bytes.len() != 32 {
			return Err(ProviderError::Decode(format!(
				"root must be 32 bytes, got {}",
				bytes.len()
			)));
		}
		let mut out = [0u8; 32];
		out.copy_from_slice(&bytes);
		Ok(Self(out))
	}
}

impl Serialize for Root {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}

impl<'de> Deserialize<'de> for Root {
	fn deserialize<D: serde::Deserializer<'de>>(
		deserializer: D,
	) -> std::result::Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}

/// Identifier accepted by block lookup endpoints.
///
/// Numeric strings normalize to `Slot`, so `get_block("5")` and `get_block(5)`
/// resolve to the same query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockId {
	Head,
	Genesis,
	Finalized,
	Slot(Slot),
	Root(Root),
}

impl fmt::Display for BlockId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BlockId::Head => write!(f, "head"),
			BlockId::Genesis => write!(f, "genesis"),
			BlockId::Finalized => write!(f, "finalized"),
			BlockId::Slot(slot) => write!(f, "{}", slot),
			BlockId::Root(root) => write!(f, "{}", root),
		}
	}
}

impl FromStr for BlockId {
	type Err = ProviderError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"head" => Ok(BlockId::Head),
			"genesis" => Ok(BlockId::Genesis),
			"finalized" => Ok(BlockId::Finalized),
			_ if s.starts_with("0x") => s
				.parse::<Root>()
				.map(BlockId::Root)
				.map_err(|_| ProviderError::InvalidBlockId(s.to_string())),
			_ => s
				.parse::<Slot>()
				.map(BlockId::Slot)
				.map_err(|_| ProviderError::InvalidBlockId(s.to_string())),
		}
	}
}

impl From<u64> for BlockId {
	fn from(slot: u64) -> Self {
		BlockId::Slot(slot)
	}
}

impl From<Root> for BlockId {
	fn from(root: Root) -> Self {
		BlockId::Root(root)
	}
}

/// Identifier accepted by validator lookup endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorId {
	Index(ValidatorIndex),
	Pubkey(String),
}

impl fmt::Display for ValidatorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ValidatorId::Index(index) => write!(f, "{}", index),
			ValidatorId::Pubkey(pubkey) => write!(f, "{}", pubkey),
		}
	}
}

impl FromStr for ValidatorId {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.parse::<ValidatorIndex>() {
			Ok(index) => Ok(ValidatorId::Index(index)),
			Err(_) => Ok(ValidatorId::Pubkey(s.to_string())),
		}
	}
}

/// Minimal transaction shape, accepted only by the unsupported write and
/// fee-estimation operations on the provider trait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
	pub to: Option<String>,
	pub value: u128,
	pub data: Vec<u8>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_chain_id_constants() {
		assert_eq!(ChainId::MAINNET.0, 1);
		assert_eq!(ChainId::GOERLI.0, 5);
	}

	#[test]
	fn test_block_id_numeric_string_normalizes_to_slot() {
		let parsed: BlockId = "5".parse().unwrap();
		assert_eq!(parsed, BlockId::Slot(5));
		assert_eq!(parsed, BlockId::from(5u64));
		assert_eq!(parsed.to_string(), "5");
	}

	#[test]
	fn test_block_id_named_tags() {
		assert_eq!("head".parse::<BlockId>().unwrap(), BlockId::Head);
		assert_eq!("genesis".parse::<BlockId>().unwrap(), BlockId::Genesis);
		assert_eq!("finalized".parse::<BlockId>().unwrap(), BlockId::Finalized);
	}

	#[test]
	fn test_block_id_root() {
		let hex_root = format!("0x{}", "ab".repeat(32));
		let parsed: BlockId = hex_root.parse().unwrap();
		assert!(matches!(parsed, BlockId::Root(_)));
		assert_eq!(parsed.to_string(), hex_root);
	}

	#[test]
	fn test_block_id_rejects_garbage() {
		assert!("latest".parse::<BlockId>().is_err());
		assert!("0xnothex".parse::<BlockId>().is_err());
		assert!("-1".parse::<BlockId>().is_err());
	}

	#[test]
	fn test_root_round_trip() {
		let hex_root = format!("0x{}", "01".repeat(32));
		let root: Root = hex_root.parse().unwrap();
		assert_eq!(root.to_string(), hex_root);

		// Also accepted without the 0x prefix
		let bare: Root = "01".repeat(32).parse().unwrap();
		assert_eq!(bare, root);
	}

	#[test]
	fn test_root_rejects_wrong_length() {
		assert!("0x1234".parse::<Root>().is_err());
	}

	#[test]
	fn test_root_serde() {
		let hex_root = format!("0x{}", "cd".repeat(32));
		let root: Root = hex_root.parse().unwrap();
		let json = serde_json::to_string(&root).unwrap();
		assert_eq!(json, format!("\"{}\"", hex_root));
		let back: Root = serde_json::from_str(&json).unwrap();
		assert_eq!(back, root);
	}

	#[test]
	fn test_validator_id_parsing() {
		assert_eq!(
			"42".parse::<ValidatorId>().unwrap(),
			ValidatorId::Index(42)
		);
		let pubkey = format!("0x{}", "aa".repeat(48));
		assert_eq!(
			pubkey.parse::<ValidatorId>().unwrap(),
			ValidatorId::Pubkey(pubkey.clone())
		);
		assert_eq!(pubkey.parse::<ValidatorId>().unwrap().to_string(), pubkey);
	}
}
