//! Network descriptors and naming conventions.
//!
//! Every live network is registered alongside a `<name>-fork` variant, and a
//! trailing `local` entry covers development nodes that derive their chain ID
//! from themselves at runtime. Only live networks carry a static chain ID.

use crate::common::ChainId;
use serde::{Deserialize, Serialize};

/// Name under which the local development network is registered.
pub const LOCAL_NETWORK_NAME: &str = "local";

/// Suffix appended to a live network name to form its fork variant.
pub const FORK_SUFFIX: &str = "-fork";

/// Classification of a registered network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
	/// A public network with a hardcoded chain ID.
	Live,
	/// A forked copy of a live network; the chain ID comes from the node.
	Fork,
	/// A local development network; the chain ID comes from the node.
	Local,
}

/// Descriptor of a network registered with the host framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
	/// Ecosystem this network belongs to.
	pub ecosystem: String,
	/// Network name, e.g. `mainnet`, `mainnet-fork`, `local`.
	pub name: String,
	/// Statically known chain ID, present only for live networks.
	pub chain_id: Option<ChainId>,
	pub network_type: NetworkType,
}

impl Network {
	pub fn live(ecosystem: &str, name: &str, chain_id: ChainId) -> Self {
		Self {
			ecosystem: ecosystem.to_string(),
			name: name.to_string(),
			chain_id: Some(chain_id),
			network_type: NetworkType::Live,
		}
	}

	pub fn fork(ecosystem: &str, base_name: &str) -> Self {
		Self {
			ecosystem: ecosystem.to_string(),
			name: format!("{}{}", base_name, FORK_SUFFIX),
			chain_id: None,
			network_type: NetworkType::Fork,
		}
	}

	pub fn local(ecosystem: &str) -> Self {
		Self {
			ecosystem: ecosystem.to_string(),
			name: LOCAL_NETWORK_NAME.to_string(),
			chain_id: None,
			network_type: NetworkType::Local,
		}
	}

	/// The statically configured chain ID, available only on live networks.
	///
	/// Fork and local networks must learn their chain ID from the node they
	/// point at, so this returns `None` for them even if `chain_id` were set.
	pub fn static_chain_id(&self) -> Option<ChainId> {
		match self.network_type {
			NetworkType::Live => self.chain_id,
			NetworkType::Fork | NetworkType::Local => None,
		}
	}

	pub fn is_fork(&self) -> bool {
		self.network_type == NetworkType::Fork
	}

	pub fn is_local(&self) -> bool {
		self.network_type == NetworkType::Local
	}
}
