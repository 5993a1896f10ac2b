//! Registration store façade
//!
//! This module provides the high-level interface over the persisted
//! collections: seeding, account registration, authentication, and the
//! registration status lifecycle. It is the sole gateway to persisted data;
//! nothing else writes to the storage medium.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::AdminConfig;
use crate::models::{
    AdminAccount, BookEventRequest, RegisterUserRequest, Registration, RegistrationStatus,
    RegistrationView, UserAccount,
};
use crate::storage::ids::IdSequence;
use crate::storage::medium::StorageMedium;
use crate::storage::repositories::{AdminRepository, RegistrationRepository, UserRepository};
use crate::utils::errors::{EventBookError, Result};

/// Placeholder user name for registrations whose `user_id` matches no stored
/// account.
const UNKNOWN_USER: &str = "Unknown User";

#[derive(Debug, Clone)]
pub struct RegistrationStore {
    pub admin: AdminRepository,
    pub users: UserRepository,
    pub registrations: RegistrationRepository,
    ids: Arc<IdSequence>,
}

impl RegistrationStore {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self {
            admin: AdminRepository::new(medium.clone()),
            users: UserRepository::new(medium.clone()),
            registrations: RegistrationRepository::new(medium),
            ids: Arc::new(IdSequence::new()),
        }
    }

    /// Seed the default admin record and empty collections on first use.
    /// Idempotent: existing data is never overwritten, so calling this on
    /// every startup is safe.
    pub async fn ensure_seeded(&self, admin: &AdminConfig) -> Result<()> {
        let seeded_admin = self
            .admin
            .seed_if_missing(&AdminAccount {
                email: admin.email.clone(),
                password: admin.password.clone(),
            })
            .await?;
        let seeded_users = self.users.seed_if_missing().await?;
        let seeded_registrations = self.registrations.seed_if_missing().await?;

        if seeded_admin || seeded_users || seeded_registrations {
            info!(
                admin = seeded_admin,
                users = seeded_users,
                registrations = seeded_registrations,
                "Seeded storage collections"
            );
        }
        Ok(())
    }

    /// Register a new user account.
    ///
    /// Fails with [`EventBookError::DuplicateUser`] when a user with the same
    /// email (case-sensitive) already exists. On success the user collection
    /// gains the new account and the registration collection gains a mirrored
    /// pending entry linked to it.
    pub async fn register_user(&self, request: RegisterUserRequest) -> Result<UserAccount> {
        if request.email.is_empty() {
            return Err(EventBookError::InvalidInput(
                "Email must not be empty".to_string(),
            ));
        }

        if self.users.find_by_email(&request.email).await?.is_some() {
            debug!(email = %request.email, "Registration rejected: duplicate email");
            return Err(EventBookError::DuplicateUser {
                email: request.email,
            });
        }

        let user = UserAccount {
            id: self.ids.next(),
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            mobile: request.mobile,
            registered_at: Utc::now(),
        };
        self.users.append(&user).await?;

        let registration = Registration {
            id: self.ids.next(),
            user_id: user.id,
            event_name: request.event_name,
            venue_name: request.venue_name,
            event_date: request.event_date,
            mobile: user.mobile.clone(),
            status: RegistrationStatus::Pending,
            registered_at: user.registered_at,
        };
        self.registrations.append(&registration).await?;

        info!(user_id = user.id, email = %user.email, "User registered");
        Ok(user)
    }

    /// Authenticate a user by exact email and password match.
    ///
    /// The error does not distinguish an unknown email from a wrong password.
    pub async fn login_user(&self, email: &str, password: &str) -> Result<UserAccount> {
        self.users
            .find_by_credentials(email, password)
            .await?
            .ok_or(EventBookError::InvalidCredentials)
    }

    /// Authenticate against the seeded admin credential pair.
    pub async fn login_admin(&self, email: &str, password: &str) -> Result<AdminAccount> {
        self.admin.verify(email, password).await
    }

    /// Book a new event for an existing user: appends a pending registration.
    ///
    /// `user_id` is not validated against the user collection; a dangling
    /// reference degrades to the "Unknown User" placeholder in the joined
    /// view.
    pub async fn book_event(
        &self,
        user_id: i64,
        request: BookEventRequest,
    ) -> Result<Registration> {
        let registration = Registration {
            id: self.ids.next(),
            user_id,
            event_name: Some(request.event_name),
            venue_name: Some(request.venue_name),
            event_date: Some(request.event_date),
            mobile: request.mobile,
            status: RegistrationStatus::Pending,
            registered_at: Utc::now(),
        };
        self.registrations.append(&registration).await?;
        info!(
            registration_id = registration.id,
            user_id = user_id,
            "Event booked"
        );
        Ok(registration)
    }

    /// All registrations belonging to one user, insertion order preserved.
    pub async fn user_registrations(&self, user_id: i64) -> Result<Vec<Registration>> {
        self.registrations.for_user(user_id).await
    }

    /// The full user collection, insertion order preserved.
    pub async fn all_users(&self) -> Result<Vec<UserAccount>> {
        self.users.list().await
    }

    /// Every registration, joined with the owning user's display name.
    pub async fn all_registrations(&self) -> Result<Vec<RegistrationView>> {
        let users = self.users.list().await?;
        let registrations = self.registrations.list().await?;

        Ok(registrations
            .into_iter()
            .map(|registration| {
                let user_name = users
                    .iter()
                    .find(|user| user.id == registration.user_id)
                    .map(UserAccount::full_name)
                    .unwrap_or_else(|| UNKNOWN_USER.to_string());
                RegistrationView {
                    registration,
                    user_name,
                }
            })
            .collect())
    }

    /// Overwrite the status of one registration.
    ///
    /// Returns `true` when the registration existed and was updated, `false`
    /// when the id matched nothing. A missing id is a soft failure, not an
    /// error.
    pub async fn update_registration_status(
        &self,
        registration_id: i64,
        status: RegistrationStatus,
    ) -> Result<bool> {
        self.registrations
            .update_status(registration_id, status)
            .await
    }
}
