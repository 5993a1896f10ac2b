//! User service implementation
//!
//! This service handles signup form validation, event booking for the
//! signed-in user, and the user dashboard view.

use tracing::{debug, info};

use crate::models::{
    BookEventRequest, RegisterUserRequest, Registration, SignupForm, UserAccount,
};
use crate::session::{Role, SessionStore};
use crate::storage::RegistrationStore;
use crate::utils::errors::{EventBookError, Result};
use crate::utils::logging::log_user_action;

/// User service for signup, booking, and dashboard data
#[derive(Debug, Clone)]
pub struct UserService {
    store: RegistrationStore,
    sessions: SessionStore,
}

impl UserService {
    pub fn new(store: RegistrationStore, sessions: SessionStore) -> Self {
        Self { store, sessions }
    }

    /// Validate a raw signup form and register the account.
    ///
    /// The password confirmation is checked here and stripped; the store
    /// never sees it.
    pub async fn signup(&self, form: SignupForm) -> Result<UserAccount> {
        if form.password != form.confirm_password {
            debug!(email = %form.email, "Signup rejected: password confirmation mismatch");
            return Err(EventBookError::InvalidInput(
                "Passwords do not match".to_string(),
            ));
        }
        if form.email.trim().is_empty() {
            return Err(EventBookError::InvalidInput(
                "Email must not be empty".to_string(),
            ));
        }

        let request = RegisterUserRequest {
            email: form.email,
            password: form.password,
            first_name: form.first_name,
            last_name: form.last_name,
            mobile: form.mobile,
            event_name: form.event_name,
            venue_name: form.venue_name,
            event_date: form.event_date,
        };

        let user = self.store.register_user(request).await?;
        log_user_action(user.id, "signup", None);
        Ok(user)
    }

    /// Book a new event for the signed-in user.
    pub async fn book_event(&self, request: BookEventRequest) -> Result<Registration> {
        let session = self.sessions.require_role(Role::User).await?;
        let user = session.as_user().ok_or_else(|| {
            EventBookError::PermissionDenied("Session is not a user session".to_string())
        })?;

        let registration = self.store.book_event(user.id, request).await?;
        log_user_action(
            user.id,
            "book_event",
            registration.event_name.as_deref(),
        );
        Ok(registration)
    }

    /// The signed-in user's registrations, for the dashboard.
    pub async fn my_registrations(&self) -> Result<Vec<Registration>> {
        let session = self.sessions.require_role(Role::User).await?;
        let user = session.as_user().ok_or_else(|| {
            EventBookError::PermissionDenied("Session is not a user session".to_string())
        })?;

        let registrations = self.store.user_registrations(user.id).await?;
        info!(
            user_id = user.id,
            count = registrations.len(),
            "Loaded user dashboard"
        );
        Ok(registrations)
    }
}
