//! Admin repository implementation

use std::sync::Arc;

use tracing::debug;

use crate::models::AdminAccount;
use crate::storage::medium::{load_json, save_json, StorageMedium};
use crate::utils::errors::{EventBookError, Result};

/// Storage key of the singleton admin record.
const ADMIN_KEY: &str = "admin";

/// Repository over the `admin` slot: a single credential pair, written once
/// at seed time.
#[derive(Clone)]
pub struct AdminRepository {
    medium: Arc<dyn StorageMedium>,
}

impl AdminRepository {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self { medium }
    }

    /// Read the seeded admin record, if one exists yet.
    pub async fn get(&self) -> Result<Option<AdminAccount>> {
        load_json(self.medium.as_ref(), ADMIN_KEY).await
    }

    /// Write the default admin record unless one already exists. Returns
    /// whether a record was written.
    pub async fn seed_if_missing(&self, account: &AdminAccount) -> Result<bool> {
        if self.get().await?.is_some() {
            return Ok(false);
        }
        save_json(self.medium.as_ref(), ADMIN_KEY, account).await?;
        debug!(email = %account.email, "Seeded admin account");
        Ok(true)
    }

    /// Compare the given credentials against the seeded record.
    pub async fn verify(&self, email: &str, password: &str) -> Result<AdminAccount> {
        let admin = self
            .get()
            .await?
            .ok_or(EventBookError::InvalidCredentials)?;
        if admin.email != email || admin.password != password {
            return Err(EventBookError::InvalidCredentials);
        }
        Ok(admin)
    }
}

impl std::fmt::Debug for AdminRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminRepository").finish_non_exhaustive()
    }
}
