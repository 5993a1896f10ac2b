//! Authentication service implementation
//!
//! This service handles user and admin login flows, session lifecycle, and
//! role-based access checks for the view layer.

use tracing::{info, warn};

use crate::models::{AdminAccount, UserAccount};
use crate::session::{Role, SessionRecord, SessionStore};
use crate::storage::RegistrationStore;
use crate::utils::errors::Result;

/// Authentication service for login, logout, and access control
#[derive(Debug, Clone)]
pub struct AuthService {
    store: RegistrationStore,
    sessions: SessionStore,
}

impl AuthService {
    pub fn new(store: RegistrationStore, sessions: SessionStore) -> Self {
        Self { store, sessions }
    }

    /// Log a user in: verify credentials against the user collection, then
    /// record the session.
    pub async fn login_user(&self, email: &str, password: &str) -> Result<UserAccount> {
        match self.store.login_user(email, password).await {
            Ok(user) => {
                self.sessions
                    .sign_in(SessionRecord::User(user.clone()))
                    .await?;
                info!(user_id = user.id, "User login succeeded");
                Ok(user)
            }
            Err(e) => {
                warn!(email = email, "User login failed");
                Err(e)
            }
        }
    }

    /// Log the admin in: verify against the seeded credential pair, then
    /// record the session.
    pub async fn login_admin(&self, email: &str, password: &str) -> Result<AdminAccount> {
        match self.store.login_admin(email, password).await {
            Ok(admin) => {
                self.sessions
                    .sign_in(SessionRecord::Admin(admin.clone()))
                    .await?;
                info!(email = %admin.email, "Admin login succeeded");
                Ok(admin)
            }
            Err(e) => {
                warn!(email = email, "Admin login failed");
                Err(e)
            }
        }
    }

    /// Clear the current session.
    pub async fn logout(&self) -> Result<()> {
        self.sessions.sign_out().await
    }

    /// The current session record, if anyone is signed in.
    pub async fn current_session(&self) -> Result<Option<SessionRecord>> {
        self.sessions.current().await
    }

    /// Route-guard check for dashboard views.
    pub async fn require_role(&self, role: Role) -> Result<SessionRecord> {
        self.sessions.require_role(role).await
    }
}
