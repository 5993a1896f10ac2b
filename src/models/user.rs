//! User account model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered user account. Immutable after creation: no update or delete
/// operation exists. Stored as an element of the `users` collection with the
/// camelCase field names of the persisted schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub registered_at: DateTime<Utc>,
}

impl UserAccount {
    /// Display name used by dashboards and the registration join.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validated signup payload as the store sees it. The password confirmation
/// never reaches this type.
///
/// The event fields are optional: the signup form may carry an initial event
/// choice, which is mirrored into the registration collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub event_name: Option<String>,
    pub venue_name: Option<String>,
    pub event_date: Option<NaiveDate>,
}

/// Raw signup form submission, including the password confirmation field.
/// Converted into a [`RegisterUserRequest`] at the service boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
}
