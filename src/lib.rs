//! eventbook
//!
//! Persistence core for an event booking demo application. This library
//! provides the account, registration, and status-workflow store over a
//! pluggable key-value medium, the transient session record, and the
//! services the view layer calls.

pub mod config;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventBookError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use session::{Role, SessionRecord, SessionStore};
pub use storage::RegistrationStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
