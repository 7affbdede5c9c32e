//! Submission entity for scholarly publishing
//!
//! This crate provides the record a manuscript lives in while it moves
//! through a journal's workflow:
//! - Submission: identity, scalar metadata, per-locale metadata, stored
//!   public identifiers
//! - Locale resolution: which language variant of a field a reader sees
//! - Status: the lifecycle enumeration and its label keys
//! - Collaborators: authors, users, persistence, mail formatting, title joining

pub mod author;
pub mod config;
pub mod error;
pub mod locale;
pub mod mail;
pub mod status;
pub mod store;
pub mod submission;
pub mod title;
pub mod user;

pub use author::*;
pub use config::*;
pub use error::*;
pub use locale::*;
pub use mail::*;
pub use status::*;
pub use store::*;
pub use submission::*;
pub use title::*;
pub use user::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
