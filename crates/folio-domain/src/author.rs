//! Author representation and the author directory collaborator

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::DirectoryError;
use crate::submission::SubmissionId;

pub type AuthorId = i64;

/// Represents a contributor to a submission
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Author {
    pub id: AuthorId,
    pub submission_id: SubmissionId,
    pub given_name: String,
    pub middle_name: Option<String>,
    pub family_name: String,
    pub email: String,
    pub affiliation: Option<String>,
    pub orcid: Option<String>,
    /// Position in the author list, lowest first
    pub sequence: u32,
    pub primary_contact: bool,
}

impl Author {
    /// Create a new author with the required name and email
    pub fn new(
        submission_id: SubmissionId,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            submission_id,
            given_name: given_name.into(),
            middle_name: None,
            family_name: family_name.into(),
            email: email.into(),
            affiliation: None,
            orcid: None,
            sequence: 0,
            primary_contact: false,
        }
    }

    /// Builder method to add a middle name
    pub fn with_middle_name(mut self, middle: impl Into<String>) -> Self {
        self.middle_name = Some(middle.into());
        self
    }

    /// Builder method to set the list position
    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self
    }

    /// Builder method to mark the author as primary contact
    pub fn as_primary_contact(mut self) -> Self {
        self.primary_contact = true;
        self
    }

    /// Format as "Given Middle Family"
    pub fn full_name(&self) -> String {
        let mut name = self.given_name.clone();
        if let Some(middle) = self.middle_name.as_deref().filter(|m| !m.is_empty()) {
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(middle);
        }
        if !name.is_empty() {
            name.push(' ');
        }
        name.push_str(&self.family_name);
        name
    }

    pub fn last_name(&self) -> &str {
        &self.family_name
    }

    /// Full or family name, as used by the author string helpers
    pub fn name(&self, last_only: bool) -> String {
        if last_only {
            self.last_name().to_string()
        } else {
            self.full_name()
        }
    }
}

/// Lookup of the authors attached to a submission.
///
/// Implementations own the list order.
pub trait AuthorDirectory: Send + Sync {
    /// Authors of a submission in display order
    fn authors_by_submission(&self, id: SubmissionId) -> Result<Vec<Author>, DirectoryError>;

    /// The author flagged as primary contact, if any
    fn primary_contact(&self, id: SubmissionId) -> Result<Option<Author>, DirectoryError>;
}

/// Author directory held in memory.
///
/// Orders authors by sequence, then puts the primary contact first among
/// equal sequences.
#[derive(Debug, Default)]
pub struct InMemoryAuthorDirectory {
    authors: RwLock<HashMap<SubmissionId, Vec<Author>>>,
}

impl InMemoryAuthorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an author to its submission, assigning an id when it has none
    pub fn add(&self, mut author: Author) -> Result<AuthorId, DirectoryError> {
        let mut authors = self
            .authors
            .write()
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;
        if author.id == 0 {
            author.id = authors.values().map(Vec::len).sum::<usize>() as AuthorId + 1;
        }
        let id = author.id;
        authors.entry(author.submission_id).or_default().push(author);
        Ok(id)
    }
}

impl AuthorDirectory for InMemoryAuthorDirectory {
    fn authors_by_submission(&self, id: SubmissionId) -> Result<Vec<Author>, DirectoryError> {
        let authors = self
            .authors
            .read()
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;
        let mut list = authors.get(&id).cloned().unwrap_or_default();
        list.sort_by(|a, b| {
            a.sequence
                .cmp(&b.sequence)
                .then(b.primary_contact.cmp(&a.primary_contact))
        });
        Ok(list)
    }

    fn primary_contact(&self, id: SubmissionId) -> Result<Option<Author>, DirectoryError> {
        Ok(self
            .authors_by_submission(id)?
            .into_iter()
            .find(|author| author.primary_contact))
    }
}
