//! Error types for folio-identifiers

use folio_domain::{ContextId, StoreError};
use thiserror::Error;

/// Error from the minter registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Minter for '{pub_id_type}' already registered in context {context_id}")]
    AlreadyRegistered {
        context_id: ContextId,
        pub_id_type: String,
    },

    #[error("Minter registry unavailable: {0}")]
    Unavailable(String),
}

/// Error raised by a minter while assigning an identifier.
#[derive(Debug, Error)]
pub enum MintError {
    #[error("Could not persist identifier: {0}")]
    Store(#[from] StoreError),

    #[error("Minting failed: {0}")]
    Failed(String),
}

/// Error from public identifier resolution.
#[derive(Debug, Error)]
pub enum PubIdError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Mint error: {0}")]
    Mint(#[from] MintError),
}
