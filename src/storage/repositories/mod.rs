//! Storage repositories module
//!
//! This module contains all repository implementations for data access

pub mod admin;
pub mod registration;
pub mod user;

// Re-export repositories
pub use admin::AdminRepository;
pub use registration::RegistrationRepository;
pub use user::UserRepository;
