use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::models::User;
use crate::utils::error::AppError;

/// Dataset compiled into the binary, used when no file is configured.
const BUNDLED_USERS: &str = include_str!("../../data/users.json");

/// Read-only snapshot of every user, shared by all requests.
///
/// Built once at startup and never mutated, so clones are cheap handles to
/// the same records and need no locking.
#[derive(Clone, Debug)]
pub struct UserStore {
    users: Arc<[User]>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if user.id == 0 {
                return Err(AppError::DataLoad(format!(
                    "user '{}' has a non-positive id",
                    user.email
                )));
            }
            if !seen.insert(user.id) {
                return Err(AppError::DataLoad(format!("duplicate user id {}", user.id)));
            }
        }

        Ok(Self { users: users.into() })
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let users: Vec<User> = serde_json::from_str(raw)
            .map_err(|e| AppError::DataLoad(format!("invalid user dataset: {}", e)))?;
        Self::new(users)
    }

    pub fn bundled() -> Result<Self, AppError> {
        Self::from_json(BUNDLED_USERS)
    }

    /// Loads `path` when given, otherwise the bundled dataset.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                log::info!("📂 Loading users from {}", path.display());
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    AppError::DataLoad(format!("cannot read {}: {}", path.display(), e))
                })?;
                Self::from_json(&raw)
            }
            None => {
                log::info!("📦 Loading bundled user dataset");
                Self::bundled()
            }
        }
    }

    /// All records in storage order.
    pub fn snapshot(&self) -> &[User] {
        &self.users
    }

    pub fn find(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
