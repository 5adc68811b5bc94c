//! Error types for the beacon provider.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors surfaced by providers and the plugin surface.
///
/// The policy is fail-fast: a missing expected field in an upstream response
/// becomes the matching domain error, a query against a disconnected provider
/// becomes `NotConnected`, and unsupported operations fail with
/// `NotImplemented` regardless of connection state. Nothing is retried.
#[derive(Error, Debug)]
pub enum ProviderError {
	#[error("provider is not connected")]
	NotConnected,

	#[error("block not found: {0}")]
	BlockNotFound(String),

	#[error("validator not found: {0}")]
	ValidatorNotFound(String),

	#[error("{0} is not implemented by this provider")]
	NotImplemented(&'static str),

	#[error("invalid block identifier: {0}")]
	InvalidBlockId(String),

	#[error("decode error: {0}")]
	Decode(String),

	#[error("network error: {0}")]
	Network(String),

	#[error("configuration error: {0}")]
	Config(String),

	#[error(transparent)]
	Other(#[from] anyhow::Error),
}
