//! Login / logout commands for the mock authentication gate.

use crate::core_state::CoreState;
use crate::session::RouteDecision;

/// Simulated login: no credentials are checked.
pub fn login(state: &CoreState) -> Result<(), String> {
    state.session().login().map_err(|e| e.to_string())?;
    Ok(())
}

pub fn logout(state: &CoreState) -> Result<(), String> {
    state.session().logout().map_err(|e| e.to_string())
}

pub fn is_authenticated(state: &CoreState) -> bool {
    state.session().is_authenticated()
}

/// Called by protected views on mount.
pub fn check_route(state: &CoreState) -> RouteDecision {
    state.session().guard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_logout_cycle() {
        let state = CoreState::default();
        assert_eq!(check_route(&state), RouteDecision::RedirectToLogin);
        login(&state).unwrap();
        assert!(is_authenticated(&state));
        assert_eq!(check_route(&state), RouteDecision::Render);
        logout(&state).unwrap();
        assert!(!is_authenticated(&state));
    }
}
