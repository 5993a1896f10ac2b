//! Session management module
//!
//! This module handles the transient authenticated-identity record that
//! gates dashboard access between login and logout.

pub mod store;

pub use store::{Role, SessionRecord, SessionStore};
