//! Public identifier resolution
//!
//! Looks up a submission's identifier of a given type. A stored value always
//! wins; otherwise the first minter enabled for the submission's context that
//! answers for the type is asked to mint one.

use std::sync::Arc;

use folio_domain::{Submission, PUBLISHER_ID};

use crate::error::PubIdError;
use crate::registry::MinterRegistry;

/// Resolves public identifiers against a minter registry
#[derive(Clone)]
pub struct PubIdResolver {
    registry: Arc<dyn MinterRegistry>,
}

impl PubIdResolver {
    pub fn new(registry: Arc<dyn MinterRegistry>) -> Self {
        Self { registry }
    }

    /// Identifier of type `pub_id_type` for a submission.
    ///
    /// `publisher-id` is read from storage only. For every other type the
    /// submission's context decides which minter applies; with no matching
    /// minter the result is `None`. Registry and minter failures propagate.
    pub fn pub_id(
        &self,
        submission: &Submission,
        pub_id_type: &str,
        preview: bool,
    ) -> Result<Option<String>, PubIdError> {
        if pub_id_type == PUBLISHER_ID {
            return Ok(submission.stored_pub_id(PUBLISHER_ID).map(str::to_string));
        }

        let minters = self.registry.load_minters(submission.context_id)?;
        let Some(minter) = minters.iter().find(|m| m.pub_id_type() == pub_id_type) else {
            tracing::debug!(
                context_id = submission.context_id,
                pub_id_type,
                "no minter enabled for identifier type"
            );
            return Ok(None);
        };

        if let Some(stored) = submission.stored_pub_id(pub_id_type) {
            tracing::debug!(
                submission_id = submission.id,
                pub_id_type,
                "using stored public identifier"
            );
            return Ok(Some(stored.to_string()));
        }

        tracing::debug!(
            submission_id = submission.id,
            pub_id_type,
            preview,
            "minting public identifier"
        );
        Ok(minter.mint(submission, preview)?)
    }
}
