//! Session persistence
//!
//! The transient authenticated-identity slot, distinct from the persisted
//! account collections. Written at login, cleared at logout, consumed by
//! every view to gate access and personalize rendering.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{AdminAccount, UserAccount};
use crate::storage::medium::{load_json, save_json, StorageMedium};
use crate::utils::errors::{EventBookError, Result};

/// Storage key of the transient session record.
const SESSION_KEY: &str = "currentUser";

/// Authenticated role carried by the session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

/// The authenticated account plus its role tag. Serializes to the account
/// fields with an added `"role"` discriminator, matching the stored session
/// shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum SessionRecord {
    User(UserAccount),
    Admin(AdminAccount),
}

impl SessionRecord {
    pub fn role(&self) -> Role {
        match self {
            SessionRecord::User(_) => Role::User,
            SessionRecord::Admin(_) => Role::Admin,
        }
    }

    /// Name shown in the dashboard greeting.
    pub fn display_name(&self) -> String {
        match self {
            SessionRecord::User(user) => user.full_name(),
            SessionRecord::Admin(admin) => admin.email.clone(),
        }
    }

    /// The signed-in user account, when the session belongs to a user.
    pub fn as_user(&self) -> Option<&UserAccount> {
        match self {
            SessionRecord::User(user) => Some(user),
            SessionRecord::Admin(_) => None,
        }
    }
}

/// Session store over a (typically in-memory) storage medium.
#[derive(Clone)]
pub struct SessionStore {
    medium: Arc<dyn StorageMedium>,
}

impl SessionStore {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self { medium }
    }

    /// Record a successful login.
    pub async fn sign_in(&self, record: SessionRecord) -> Result<()> {
        debug!(role = %record.role(), "Signing in session");
        save_json(self.medium.as_ref(), SESSION_KEY, &record).await
    }

    /// The current session record, if anyone is signed in.
    pub async fn current(&self) -> Result<Option<SessionRecord>> {
        load_json(self.medium.as_ref(), SESSION_KEY).await
    }

    /// Clear the session record.
    pub async fn sign_out(&self) -> Result<()> {
        info!("Signing out session");
        self.medium.remove(SESSION_KEY).await
    }

    /// Route-guard check: the current session must exist and carry `role`.
    /// Unauthenticated or wrong-role access fails with `PermissionDenied`,
    /// which the view layer turns into a redirect to the login page.
    pub async fn require_role(&self, role: Role) -> Result<SessionRecord> {
        let record = self.current().await?.ok_or_else(|| {
            EventBookError::PermissionDenied("No active session".to_string())
        })?;
        if record.role() != role {
            return Err(EventBookError::PermissionDenied(format!(
                "Requires {role} role, session has {}",
                record.role()
            )));
        }
        Ok(record)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}
