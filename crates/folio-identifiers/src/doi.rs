//! DOI minter
//!
//! Assigns `{prefix}/{context_id}.{submission_id}` under the configured DOI
//! prefix and records it through the submission store.

use std::sync::Arc;

use folio_domain::{FolioConfig, Submission, SubmissionStore};

use crate::error::MintError;
use crate::minter::IdentifierMinter;

/// Identifier type tag for DOIs
pub const DOI: &str = "doi";

pub struct DoiMinter {
    prefix: Option<String>,
    store: Arc<dyn SubmissionStore>,
}

impl DoiMinter {
    pub fn new(prefix: Option<String>, store: Arc<dyn SubmissionStore>) -> Self {
        Self { prefix, store }
    }

    /// Minter using `identifiers.doi_prefix` from the configuration
    pub fn from_config(config: &FolioConfig, store: Arc<dyn SubmissionStore>) -> Self {
        Self::new(config.identifiers.doi_prefix.clone(), store)
    }

    /// The DOI this minter would assign, without storing it
    pub fn doi_for(&self, submission: &Submission) -> Option<String> {
        let prefix = self.prefix.as_deref().filter(|p| !p.is_empty())?;
        Some(format!(
            "{}/{}.{}",
            prefix, submission.context_id, submission.id
        ))
    }
}

impl IdentifierMinter for DoiMinter {
    fn pub_id_type(&self) -> &str {
        DOI
    }

    fn mint(&self, submission: &Submission, preview: bool) -> Result<Option<String>, MintError> {
        if submission.id == 0 {
            return Err(MintError::Failed(
                "submission must be stored before a DOI can be assigned".to_string(),
            ));
        }
        let Some(doi) = self.doi_for(submission) else {
            tracing::warn!(
                context_id = submission.context_id,
                "DOI requested but no prefix is configured"
            );
            return Ok(None);
        };
        if !preview {
            self.store.set_stored_pub_id(submission.id, DOI, &doi)?;
            tracing::info!(submission_id = submission.id, doi = %doi, "assigned DOI");
        }
        Ok(Some(doi))
    }
}
