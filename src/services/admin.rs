//! Admin service implementation
//!
//! Role-gated views and mutations for the admin dashboard: the full user
//! list, the joined registration list, and status changes.

use crate::models::{RegistrationStatus, RegistrationView, UserAccount};
use crate::session::{Role, SessionStore};
use crate::storage::RegistrationStore;
use crate::utils::errors::Result;
use crate::utils::logging::log_admin_action;

/// Admin service for dashboard views and status management
#[derive(Debug, Clone)]
pub struct AdminService {
    store: RegistrationStore,
    sessions: SessionStore,
}

impl AdminService {
    pub fn new(store: RegistrationStore, sessions: SessionStore) -> Self {
        Self { store, sessions }
    }

    /// The full user collection, admin session required.
    pub async fn list_users(&self) -> Result<Vec<UserAccount>> {
        self.sessions.require_role(Role::Admin).await?;
        self.store.all_users().await
    }

    /// Every registration joined with its owner's name, admin session
    /// required.
    pub async fn list_registrations(&self) -> Result<Vec<RegistrationView>> {
        self.sessions.require_role(Role::Admin).await?;
        self.store.all_registrations().await
    }

    /// Change one registration's status. Returns `false` when the id matched
    /// nothing; the view surfaces that as a failed update rather than an
    /// error.
    pub async fn set_registration_status(
        &self,
        registration_id: i64,
        status: RegistrationStatus,
    ) -> Result<bool> {
        let session = self.sessions.require_role(Role::Admin).await?;
        let updated = self
            .store
            .update_registration_status(registration_id, status)
            .await?;
        log_admin_action(
            &session.display_name(),
            "set_registration_status",
            Some(&registration_id.to_string()),
            Some(status.as_str()),
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdminConfig;
    use crate::models::{AdminAccount, RegisterUserRequest};
    use crate::session::SessionRecord;
    use crate::storage::medium::MemoryStorage;
    use crate::utils::errors::EventBookError;
    use assert_matches::assert_matches;
    use std::sync::Arc;

    async fn service() -> AdminService {
        let store = RegistrationStore::new(Arc::new(MemoryStorage::new()));
        store
            .ensure_seeded(&AdminConfig {
                email: "admin@x.com".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();
        let sessions = SessionStore::new(Arc::new(MemoryStorage::new()));
        AdminService::new(store, sessions)
    }

    async fn sign_in_admin(service: &AdminService) {
        service
            .sessions
            .sign_in(SessionRecord::Admin(AdminAccount {
                email: "admin@x.com".to_string(),
                password: "pw".to_string(),
            }))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_views_require_admin_session() {
        let service = service().await;
        assert_matches!(
            service.list_users().await,
            Err(EventBookError::PermissionDenied(_))
        );
        assert_matches!(
            service.list_registrations().await,
            Err(EventBookError::PermissionDenied(_))
        );
        assert_matches!(
            service
                .set_registration_status(1, RegistrationStatus::Confirmed)
                .await,
            Err(EventBookError::PermissionDenied(_))
        );
    }

    #[tokio::test]
    async fn test_admin_can_confirm_a_registration() {
        let service = service().await;
        let user = service
            .store
            .register_user(RegisterUserRequest {
                email: "a@x.com".to_string(),
                password: "p".to_string(),
                first_name: "A".to_string(),
                last_name: "B".to_string(),
                mobile: "1".to_string(),
                event_name: None,
                venue_name: None,
                event_date: None,
            })
            .await
            .unwrap();
        sign_in_admin(&service).await;

        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 1);

        let registrations = service.list_registrations().await.unwrap();
        assert_eq!(registrations.len(), 1);
        assert_eq!(registrations[0].registration.user_id, user.id);

        let updated = service
            .set_registration_status(
                registrations[0].registration.id,
                RegistrationStatus::Confirmed,
            )
            .await
            .unwrap();
        assert!(updated);

        let registrations = service.list_registrations().await.unwrap();
        assert_eq!(
            registrations[0].registration.status,
            RegistrationStatus::Confirmed
        );
    }

    #[tokio::test]
    async fn test_status_update_on_missing_id_reports_false() {
        let service = service().await;
        sign_in_admin(&service).await;
        let updated = service
            .set_registration_status(999, RegistrationStatus::Cancelled)
            .await
            .unwrap();
        assert!(!updated);
    }
}
