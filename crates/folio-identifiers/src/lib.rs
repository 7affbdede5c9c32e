//! Public identifier assignment for submissions
//!
//! This crate provides:
//! - IdentifierMinter: the capability a DOI/URN/... plugin implements
//! - MinterRegistry: which minters a publishing context has enabled
//! - PubIdResolver: stored-value short circuit, preview and minting
//! - DoiMinter: a DOI plugin backed by the submission store

pub mod doi;
pub mod error;
pub mod minter;
pub mod registry;
pub mod resolver;

pub use doi::*;
pub use error::*;
pub use minter::*;
pub use registry::*;
pub use resolver::*;
