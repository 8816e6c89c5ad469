//! In-memory stores for events, the family roster and the user profile.
//!
//! Seeded from fixtures when the application state is built; nothing is
//! persisted. Every mutation goes through a validated draft and is applied
//! in a single step.

pub mod events;
pub mod profile;
pub mod roster;

pub use events::EventStore;
pub use profile::ProfileStore;
pub use roster::FamilyRoster;

use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("No free id left for {entity_type}")]
    IdsExhausted { entity_type: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

impl StoreError {
    pub(crate) fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }
}
