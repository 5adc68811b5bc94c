//! Plugin surface for Beacon Chain networks.
//!
//! This crate is what the host framework consumes: the `Beacon` ecosystem
//! definition with its block decoding, the registered network triples
//! (every live network plus a `<name>-fork` variant and the trailing `local`
//! entry), a registry of constructed providers, and the factory that builds
//! providers from TOML configuration.

pub mod ecosystem;
pub mod factory;
pub mod networks;
pub mod registry;

pub use ecosystem::Beacon;
pub use factory::{create_beacon_provider, registry_from_config, BeaconProviderSchema};
pub use networks::{find_network, networks, ECOSYSTEM_NAME, NETWORKS};
pub use registry::ProviderRegistry;
