//! User repository implementation

use std::sync::Arc;

use tracing::debug;

use crate::models::UserAccount;
use crate::storage::medium::{load_json, save_json, StorageMedium};
use crate::utils::errors::Result;

/// Storage key of the user collection.
const USERS_KEY: &str = "users";

/// Repository over the `users` collection. Accounts are append-only: there is
/// no update or delete.
#[derive(Clone)]
pub struct UserRepository {
    medium: Arc<dyn StorageMedium>,
}

impl UserRepository {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self { medium }
    }

    /// Write an empty collection unless one already exists. Returns whether
    /// a collection was written.
    pub async fn seed_if_missing(&self) -> Result<bool> {
        if load_json::<Vec<UserAccount>>(self.medium.as_ref(), USERS_KEY)
            .await?
            .is_some()
        {
            return Ok(false);
        }
        save_json(self.medium.as_ref(), USERS_KEY, &Vec::<UserAccount>::new()).await?;
        Ok(true)
    }

    /// All users in insertion order.
    pub async fn list(&self) -> Result<Vec<UserAccount>> {
        Ok(load_json(self.medium.as_ref(), USERS_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Case-sensitive exact match on the email field.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|user| user.email == email))
    }

    /// Linear scan for an exact match on both email and password.
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserAccount>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|user| user.email == email && user.password == password))
    }

    /// Append a new account and persist the whole collection.
    pub async fn append(&self, user: &UserAccount) -> Result<()> {
        let mut users = self.list().await?;
        users.push(user.clone());
        save_json(self.medium.as_ref(), USERS_KEY, &users).await?;
        debug!(user_id = user.id, email = %user.email, "Appended user");
        Ok(())
    }
}

impl std::fmt::Debug for UserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRepository").finish_non_exhaustive()
    }
}
