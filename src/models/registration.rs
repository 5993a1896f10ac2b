//! Registration model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::errors::EventBookError;

/// A booking linking a user to one event occurrence with a lifecycle status.
/// Stored as an element of the `registrations` collection.
///
/// Event fields are optional because a registration mirrored from signup only
/// carries what the signup form supplied; a booked event carries all of them.
/// `user_id` is not validated against the user collection — a dangling
/// reference degrades to the "Unknown User" placeholder on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    pub user_id: i64,
    pub event_name: Option<String>,
    pub venue_name: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub mobile: String,
    pub status: RegistrationStatus,
    pub registered_at: DateTime<Utc>,
}

/// Registration lifecycle status. Every transition between any two states,
/// including self-transitions, is permitted; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Confirmed => "confirmed",
            RegistrationStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationStatus {
    type Err = EventBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RegistrationStatus::Pending),
            "confirmed" => Ok(RegistrationStatus::Confirmed),
            "cancelled" => Ok(RegistrationStatus::Cancelled),
            other => Err(EventBookError::InvalidInput(format!(
                "Unknown registration status: {other}"
            ))),
        }
    }
}

/// A registration joined with the owning user's display name, as served to
/// the admin dashboard. `user_name` falls back to "Unknown User" when the
/// `user_id` matches no stored user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationView {
    #[serde(flatten)]
    pub registration: Registration,
    pub user_name: String,
}

/// New-event booking form submission. All event fields are required here,
/// unlike the signup mirror.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEventRequest {
    pub event_name: String,
    pub venue_name: String,
    pub event_date: NaiveDate,
    pub mobile: String,
}
