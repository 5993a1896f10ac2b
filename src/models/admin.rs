//! Admin account model

use serde::{Deserialize, Serialize};

/// The singleton admin credential pair, seeded once at first run and never
/// mutated afterwards. Stored under the `admin` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAccount {
    pub email: String,
    pub password: String,
}
