use crate::drafts::ProfileDraft;
use crate::models::UserProfile;

use super::StoreError;

/// Holder for the signed-in user's profile.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profile: UserProfile,
}

impl ProfileStore {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn update(&mut self, draft: &ProfileDraft) -> Result<(), StoreError> {
        draft.apply_to(&mut self.profile)?;
        tracing::info!(profile_id = %self.profile.id, "Profile updated");
        Ok(())
    }
}
