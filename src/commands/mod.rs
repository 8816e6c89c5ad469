//! IPC-style commands for the UI shell.
//!
//! Every command takes plain data plus the shared `CoreState`, checks the
//! session and returns `Result<T, String>` so the shell
//! can forward errors as-is. Form validation failures are not errors: they
//! come back inside a `SaveResult` for display next to the inputs.

pub mod family;
pub mod profile;
pub mod session;
pub mod timeline;

use serde::Serialize;

use crate::store::StoreError;
use crate::validation::ValidationErrors;

/// Outcome of submitting a form draft.
#[derive(Debug, Clone, Serialize)]
pub struct SaveResult<T> {
    /// Id of the created or updated entity; `None` when validation failed.
    pub saved: Option<T>,
    pub errors: ValidationErrors,
}

impl<T> SaveResult<T> {
    pub fn is_saved(&self) -> bool {
        self.saved.is_some()
    }
}

/// Splits validation failures (returned to the form) from real errors.
pub(crate) fn into_save_result<T>(result: Result<T, StoreError>) -> Result<SaveResult<T>, String> {
    match result {
        Ok(id) => Ok(SaveResult {
            saved: Some(id),
            errors: ValidationErrors::default(),
        }),
        Err(StoreError::Validation(errors)) => Ok(SaveResult {
            saved: None,
            errors,
        }),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_stays_an_error() {
        let result: Result<SaveResult<u32>, String> =
            into_save_result(Err(StoreError::not_found("family_member", 7)));
        assert_eq!(
            result.unwrap_err(),
            "Entity not found: family_member with id 7"
        );
    }

    #[test]
    fn validation_becomes_form_errors() {
        let mut errors = ValidationErrors::default();
        errors.insert("name", "Name is required");
        let result = into_save_result::<u32>(Err(StoreError::Validation(errors))).unwrap();
        assert!(!result.is_saved());
        assert_eq!(result.errors.get("name"), Some("Name is required"));
    }
}
