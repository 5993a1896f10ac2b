//! Registration repository implementation

use std::sync::Arc;

use tracing::debug;

use crate::models::{Registration, RegistrationStatus};
use crate::storage::medium::{load_json, save_json, StorageMedium};
use crate::utils::errors::Result;

/// Storage key of the registration collection.
const REGISTRATIONS_KEY: &str = "registrations";

/// Repository over the `registrations` collection. Registrations are never
/// deleted; only the status field is mutable.
#[derive(Clone)]
pub struct RegistrationRepository {
    medium: Arc<dyn StorageMedium>,
}

impl RegistrationRepository {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self { medium }
    }

    /// Write an empty collection unless one already exists. Returns whether
    /// a collection was written.
    pub async fn seed_if_missing(&self) -> Result<bool> {
        if load_json::<Vec<Registration>>(self.medium.as_ref(), REGISTRATIONS_KEY)
            .await?
            .is_some()
        {
            return Ok(false);
        }
        save_json(
            self.medium.as_ref(),
            REGISTRATIONS_KEY,
            &Vec::<Registration>::new(),
        )
        .await?;
        Ok(true)
    }

    /// All registrations in insertion order.
    pub async fn list(&self) -> Result<Vec<Registration>> {
        Ok(load_json(self.medium.as_ref(), REGISTRATIONS_KEY)
            .await?
            .unwrap_or_default())
    }

    /// All registrations belonging to `user_id`, insertion order preserved.
    pub async fn for_user(&self, user_id: i64) -> Result<Vec<Registration>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|registration| registration.user_id == user_id)
            .collect())
    }

    /// Append a new registration and persist the whole collection.
    pub async fn append(&self, registration: &Registration) -> Result<()> {
        let mut registrations = self.list().await?;
        registrations.push(registration.clone());
        save_json(self.medium.as_ref(), REGISTRATIONS_KEY, &registrations).await?;
        debug!(
            registration_id = registration.id,
            user_id = registration.user_id,
            "Appended registration"
        );
        Ok(())
    }

    /// Overwrite the status of the registration with the given id and persist
    /// the collection. Returns `false`, without mutating anything, when the
    /// id does not exist.
    pub async fn update_status(&self, id: i64, status: RegistrationStatus) -> Result<bool> {
        let mut registrations = self.list().await?;
        let Some(registration) = registrations
            .iter_mut()
            .find(|registration| registration.id == id)
        else {
            debug!(registration_id = id, "Status update for unknown registration");
            return Ok(false);
        };
        registration.status = status;
        save_json(self.medium.as_ref(), REGISTRATIONS_KEY, &registrations).await?;
        debug!(registration_id = id, status = %status, "Updated registration status");
        Ok(true)
    }
}

impl std::fmt::Debug for RegistrationRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRepository").finish_non_exhaustive()
    }
}
