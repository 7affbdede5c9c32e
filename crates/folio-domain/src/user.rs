//! Submitting user accounts

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::DirectoryError;

pub type UserId = i64;

/// A registered account on the platform
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub full_name: String,
    pub email: String,
}

impl User {
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            full_name: full_name.into(),
            email: email.into(),
        }
    }
}

/// Account lookup collaborator
pub trait UserDirectory: Send + Sync {
    fn user_by_id(&self, id: UserId) -> Result<Option<User>, DirectoryError>;
}

#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, user: User) -> Result<(), DirectoryError> {
        self.users
            .write()
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?
            .insert(user.id, user);
        Ok(())
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn user_by_id(&self, id: UserId) -> Result<Option<User>, DirectoryError> {
        let users = self
            .users
            .read()
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;
        Ok(users.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let dir = InMemoryUserDirectory::new();
        dir.add(User::new(3, "ada", "Ada Lovelace", "ada@example.org"))
            .unwrap();
        assert_eq!(dir.user_by_id(3).unwrap().unwrap().username, "ada");
        assert!(dir.user_by_id(4).unwrap().is_none());
    }
}
