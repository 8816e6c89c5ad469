//! Application state shared by every view.
//!
//! `CoreState` owns the session and the three in-memory stores. Stores sit
//! behind `RwLock` so a UI shell can hold the state in an `Arc` and read
//! from several places at once; writes (saves, deletes) take the write lock.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::fixtures;
use crate::models::{FamilyMember, HealthEvent, UserProfile};
use crate::session::{Session, SessionError};
use crate::store::{EventStore, FamilyRoster, ProfileStore, StoreError};

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    session: Session,
    events: RwLock<EventStore>,
    roster: RwLock<FamilyRoster>,
    profile: RwLock<ProfileStore>,
}

impl CoreState {
    /// State seeded with the demo fixtures.
    pub fn new(session: Session) -> Self {
        Self::with_data(
            session,
            fixtures::mock_events(),
            fixtures::mock_family_members(),
            fixtures::demo_user(),
        )
    }

    pub fn with_data(
        session: Session,
        events: Vec<HealthEvent>,
        members: Vec<FamilyMember>,
        profile: UserProfile,
    ) -> Self {
        tracing::debug!(
            events = events.len(),
            members = members.len(),
            "Seeding application state"
        );
        Self {
            session,
            events: RwLock::new(EventStore::new(events)),
            roster: RwLock::new(FamilyRoster::new(members)),
            profile: RwLock::new(ProfileStore::new(profile)),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fails with `NotAuthenticated` while logged out.
    pub fn require_session(&self) -> Result<(), CoreError> {
        self.session.require_authenticated().map_err(CoreError::from)
    }

    // ── Store access ─────────────────────────────────────

    pub fn read_events(&self) -> Result<RwLockReadGuard<'_, EventStore>, CoreError> {
        self.events.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_events(&self) -> Result<RwLockWriteGuard<'_, EventStore>, CoreError> {
        self.events.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn read_roster(&self) -> Result<RwLockReadGuard<'_, FamilyRoster>, CoreError> {
        self.roster.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_roster(&self) -> Result<RwLockWriteGuard<'_, FamilyRoster>, CoreError> {
        self.roster.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn read_profile(&self) -> Result<RwLockReadGuard<'_, ProfileStore>, CoreError> {
        self.profile.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_profile(&self) -> Result<RwLockWriteGuard<'_, ProfileStore>, CoreError> {
        self.profile.write().map_err(|_| CoreError::LockPoisoned)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new(Session::in_memory())
    }
}

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Session(#[from] SessionError),
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("{0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_seeded_and_logged_out() {
        let state = CoreState::default();
        assert!(!state.session().is_authenticated());
        assert_eq!(state.read_events().unwrap().len(), 2);
        assert_eq!(state.read_roster().unwrap().members().len(), 4);
        assert_eq!(state.read_profile().unwrap().profile().name, "Demo User");
    }

    #[test]
    fn require_session_follows_login() {
        let state = CoreState::default();
        assert!(matches!(
            state.require_session(),
            Err(CoreError::Session(SessionError::NotAuthenticated))
        ));
        state.session().login().unwrap();
        assert!(state.require_session().is_ok());
    }

    #[test]
    fn with_data_uses_given_collections() {
        let state = CoreState::with_data(Session::in_memory(), vec![], vec![], fixtures::demo_user());
        assert!(state.read_events().unwrap().is_empty());
        assert!(state.read_roster().unwrap().members().is_empty());
    }
}
