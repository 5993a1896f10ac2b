//! Storage module
//!
//! Persistence layer: the key-value medium abstraction, id generation,
//! per-collection repositories, and the store façade over them.

pub mod ids;
pub mod medium;
pub mod repositories;
pub mod store;

pub use ids::IdSequence;
pub use medium::{create_medium, JsonFileStorage, MemoryStorage, StorageMedium};
pub use repositories::{AdminRepository, RegistrationRepository, UserRepository};
pub use store::RegistrationStore;
