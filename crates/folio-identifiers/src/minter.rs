//! Identifier-assignment capability

use folio_domain::Submission;

use crate::error::MintError;

/// A plugin that assigns public identifiers of one type.
pub trait IdentifierMinter: Send + Sync {
    /// Type tag this minter answers for (`doi`, `other::urn`, ...)
    fn pub_id_type(&self) -> &str;

    /// Compute the identifier for a submission.
    ///
    /// In preview mode nothing may be persisted. Otherwise the minter stores
    /// the value through its own collaborator. `None` means the minter cannot
    /// assign an identifier for this record.
    fn mint(&self, submission: &Submission, preview: bool) -> Result<Option<String>, MintError>;
}

/// Type tag for a site-defined identifier scheme
pub fn other_pub_id_type(name: &str) -> String {
    format!("other::{}", name)
}
