//! Plugin configuration types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level plugin configuration.
///
/// Keyed by network name; each configured network gets its own provider. The
/// `-fork` variants and the local network are configured like any other name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconConfig {
	/// Network selected when the host does not name one explicitly.
	pub default_network: String,
	/// Per-network connection settings.
	#[serde(default)]
	pub networks: BTreeMap<String, NetworkSettings>,
}

/// Connection settings for a single configured network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSettings {
	/// Base URI of the Beacon API node.
	pub uri: String,
	/// Request timeout in seconds; the provider default applies when unset.
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}
