//! Shared test infrastructure
//!
//! Builders for a fully wired store, session slot, and service factory over
//! either an in-memory medium or a temporary file-backed one.

use std::sync::Arc;

use eventbook::config::AdminConfig;
use eventbook::services::ServiceFactory;
use eventbook::session::SessionStore;
use eventbook::storage::{JsonFileStorage, MemoryStorage, RegistrationStore};
use tempfile::TempDir;

/// Seed credentials used across the integration suite.
pub fn test_admin_config() -> AdminConfig {
    AdminConfig {
        email: "harshitha8388@gmail.com".to_string(),
        password: "123456789".to_string(),
    }
}

/// A wired application core for one test.
pub struct TestContext {
    pub store: RegistrationStore,
    pub sessions: SessionStore,
    pub services: ServiceFactory,
    /// Kept alive so the data directory outlives the test body.
    pub temp_dir: Option<TempDir>,
}

impl TestContext {
    /// Context over an in-memory medium, seeded.
    pub async fn in_memory() -> Self {
        let store = RegistrationStore::new(Arc::new(MemoryStorage::new()));
        Self::wire(store, None).await
    }

    /// Context over a file-backed medium in a temp directory, seeded.
    pub async fn with_file_storage() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let medium = JsonFileStorage::open(temp_dir.path())
            .await
            .expect("Failed to open file storage");
        let store = RegistrationStore::new(Arc::new(medium));
        Self::wire(store, Some(temp_dir)).await
    }

    async fn wire(store: RegistrationStore, temp_dir: Option<TempDir>) -> Self {
        store
            .ensure_seeded(&test_admin_config())
            .await
            .expect("Failed to seed store");
        let sessions = SessionStore::new(Arc::new(MemoryStorage::new()));
        let services = ServiceFactory::new(store.clone(), sessions.clone());
        Self {
            store,
            sessions,
            services,
            temp_dir,
        }
    }
}

/// A second store instance over the same data directory, simulating a
/// process restart against durable storage.
pub async fn reopen_store(ctx: &TestContext) -> RegistrationStore {
    let temp_dir = ctx
        .temp_dir
        .as_ref()
        .expect("reopen_store needs file-backed context");
    let medium = JsonFileStorage::open(temp_dir.path())
        .await
        .expect("Failed to reopen file storage");
    let store = RegistrationStore::new(Arc::new(medium));
    store
        .ensure_seeded(&test_admin_config())
        .await
        .expect("Failed to re-seed store");
    store
}
