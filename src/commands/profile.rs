//! Profile page commands.

use crate::core_state::CoreState;
use crate::drafts::ProfileDraft;
use crate::models::UserProfile;

use super::{into_save_result, SaveResult};

pub fn get_profile(state: &CoreState) -> Result<UserProfile, String> {
    state.require_session().map_err(|e| e.to_string())?;

    let store = state.read_profile().map_err(|e| e.to_string())?;
    let profile = store.profile().clone();

    Ok(profile)
}

/// Applies the "Edit Profile" form. Returns the profile id when saved.
pub fn update_profile(draft: ProfileDraft, state: &CoreState) -> Result<SaveResult<String>, String> {
    state.require_session().map_err(|e| e.to_string())?;

    let mut store = state.write_profile().map_err(|e| e.to_string())?;
    let result = store.update(&draft).map(|()| store.profile().id.clone());

    into_save_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::session::login;

    #[test]
    fn profile_round_trip() {
        let state = CoreState::default();
        login(&state).unwrap();

        let mut draft = ProfileDraft::from_profile(&get_profile(&state).unwrap());
        draft.set_field("description", "Keeps the family records").unwrap();
        let result = update_profile(draft, &state).unwrap();
        assert_eq!(result.saved.as_deref(), Some("user-1"));

        let profile = get_profile(&state).unwrap();
        assert_eq!(profile.description.as_deref(), Some("Keeps the family records"));
    }

    #[test]
    fn logged_out_profile_is_refused() {
        let state = CoreState::default();
        assert_eq!(get_profile(&state).unwrap_err(), "Not authenticated");
    }
}
