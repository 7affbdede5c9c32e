//! Submission lifecycle states and their display label keys

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::DomainError;

/// Lifecycle state of a submission.
///
/// The integer codes are persisted and must not change. Code 2 is unused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum SubmissionStatus {
    Archived = 0,
    #[default]
    Queued = 1,
    Published = 3,
    Declined = 4,
}

impl SubmissionStatus {
    /// Get all lifecycle states in code order
    pub fn all() -> &'static [SubmissionStatus] {
        &[
            SubmissionStatus::Archived,
            SubmissionStatus::Queued,
            SubmissionStatus::Published,
            SubmissionStatus::Declined,
        ]
    }

    /// Persisted integer code
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Translation key used to label this state in the UI
    pub fn label_key(self) -> &'static str {
        match self {
            SubmissionStatus::Archived => "submissions.archived",
            SubmissionStatus::Queued => "submissions.queued",
            SubmissionStatus::Published => "submissions.published",
            SubmissionStatus::Declined => "submissions.declined",
        }
    }

    /// Every state with its label key, built on first use
    pub fn status_map() -> &'static HashMap<SubmissionStatus, &'static str> {
        &*STATUS_LABELS
    }
}

impl TryFrom<i32> for SubmissionStatus {
    type Error = DomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SubmissionStatus::Archived),
            1 => Ok(SubmissionStatus::Queued),
            3 => Ok(SubmissionStatus::Published),
            4 => Ok(SubmissionStatus::Declined),
            other => Err(DomainError::UnknownStatus(other)),
        }
    }
}

impl From<SubmissionStatus> for i32 {
    fn from(status: SubmissionStatus) -> Self {
        status.code()
    }
}

lazy_static! {
    /// Status to label key table, built on first use and never mutated
    static ref STATUS_LABELS: HashMap<SubmissionStatus, &'static str> = SubmissionStatus::all()
        .iter()
        .map(|status| (*status, status.label_key()))
        .collect();
}

/// Label key for a raw persisted status code.
///
/// Fails with [`DomainError::UnknownStatus`] instead of guessing a label for
/// codes outside the enumeration.
pub fn status_key_for_code(code: i32) -> Result<&'static str, DomainError> {
    SubmissionStatus::try_from(code).map(SubmissionStatus::label_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(SubmissionStatus::Archived.code(), 0);
        assert_eq!(SubmissionStatus::Queued.code(), 1);
        assert_eq!(SubmissionStatus::Published.code(), 3);
        assert_eq!(SubmissionStatus::Declined.code(), 4);
    }

    #[test]
    fn test_label_keys() {
        assert_eq!(SubmissionStatus::Archived.label_key(), "submissions.archived");
        assert_eq!(SubmissionStatus::Queued.label_key(), "submissions.queued");
        assert_eq!(SubmissionStatus::Published.label_key(), "submissions.published");
        assert_eq!(SubmissionStatus::Declined.label_key(), "submissions.declined");
    }

    #[test]
    fn test_every_status_has_a_label() {
        for status in SubmissionStatus::all() {
            assert!(!status.label_key().is_empty(), "{:?} has no label", status);
        }
    }

    #[test]
    fn test_status_map_covers_every_state() {
        let map = SubmissionStatus::status_map();
        assert_eq!(map.len(), SubmissionStatus::all().len());
        for status in SubmissionStatus::all() {
            assert_eq!(map.get(status).copied(), Some(status.label_key()));
        }
        assert!(std::ptr::eq(map, SubmissionStatus::status_map()));
    }

    #[test]
    fn test_gap_code_is_rejected() {
        let err = SubmissionStatus::try_from(2).unwrap_err();
        assert!(matches!(err, DomainError::UnknownStatus(2)));
        assert!(status_key_for_code(-1).is_err());
        assert_eq!(status_key_for_code(3).unwrap(), "submissions.published");
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&SubmissionStatus::Published).unwrap();
        assert_eq!(json, "3");
        let back: SubmissionStatus = serde_json::from_str("4").unwrap();
        assert_eq!(back, SubmissionStatus::Declined);
        assert!(serde_json::from_str::<SubmissionStatus>("2").is_err());
    }
}
