//! Registered beacon networks.

use beacon_types::{ChainId, Network};

/// Name under which the ecosystem registers with the host framework.
pub const ECOSYSTEM_NAME: &str = "beacon";

/// Live networks and their hardcoded chain IDs.
pub const NETWORKS: &[(&str, u64)] = &[("mainnet", 1), ("goerli", 5)];

/// All networks this plugin registers, in registration order.
///
/// For every live network the host gets the base entry and a `<name>-fork`
/// variant; the trailing `local` entry covers development nodes, which derive
/// their chain ID from themselves at runtime.
pub fn networks() -> Vec<Network> {
	let mut networks = Vec::with_capacity(NETWORKS.len() * 2 + 1);
	for (name, chain_id) in NETWORKS {
		networks.push(Network::live(ECOSYSTEM_NAME, name, ChainId(*chain_id)));
		networks.push(Network::fork(ECOSYSTEM_NAME, name));
	}
	networks.push(Network::local(ECOSYSTEM_NAME));
	networks
}

/// Looks up a registered network descriptor by name.
pub fn find_network(name: &str) -> Option<Network> {
	networks().into_iter().find(|network| network.name == name)
}
