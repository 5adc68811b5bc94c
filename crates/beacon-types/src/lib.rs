//! Shared types for the beacon provider plugin.
//!
//! This crate defines the domain types exchanged between the plugin surface,
//! the provider adapter, and the HTTP client: chain and block identifiers,
//! network descriptors, decoded blocks, the raw Beacon API response shapes,
//! the provider error taxonomy, and the `Provider`/`Ecosystem` traits that
//! tie the pieces together.

pub mod api;
pub mod blocks;
pub mod common;
pub mod errors;
pub mod networks;
pub mod provider;
pub mod validation;

pub use api::*;
pub use blocks::*;
pub use common::*;
pub use errors::*;
pub use networks::*;
pub use provider::*;
pub use validation::*;
