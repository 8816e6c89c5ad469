//! Mock authentication gate.
//!
//! There is no credential check: logging in sets a flag, logging out clears
//! it. Views receive a `Session` instead of polling a global flag, and
//! protected views ask it whether to render or redirect to the login page.
//!
//! Key properties:
//! - The flag's storage is behind `AuthStore` (memory, or a flag file)
//! - A missing or unreadable flag means logged out
//! - Logging out twice is not an error

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::config;

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Session storage error: {0}")]
    Io(#[from] io::Error),
}

// ═══════════════════════════════════════════════════════════
// AuthStore: where the flag lives
// ═══════════════════════════════════════════════════════════

pub trait AuthStore: Send + Sync {
    fn is_authenticated(&self) -> bool;
    fn login(&self) -> Result<(), SessionError>;
    fn logout(&self) -> Result<(), SessionError>;
}

/// Flag held in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryAuthStore {
    logged_in: AtomicBool,
}

impl MemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuthStore for MemoryAuthStore {
    fn is_authenticated(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }

    fn login(&self) -> Result<(), SessionError> {
        self.logged_in.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn logout(&self) -> Result<(), SessionError> {
        self.logged_in.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// Flag persisted as a small file containing `true`, so a restart stays
/// logged in (the desktop analogue of browser local storage).
#[derive(Debug, Clone)]
pub struct FlagFileAuthStore {
    path: PathBuf,
}

impl FlagFileAuthStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/Kinfolio/session.flag` (or under `KINFOLIO_DATA_DIR`).
    pub fn in_app_data() -> Self {
        Self::new(config::auth_flag_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuthStore for FlagFileAuthStore {
    fn is_authenticated(&self) -> bool {
        fs::read_to_string(&self.path)
            .map(|s| s.trim() == "true")
            .unwrap_or(false)
    }

    fn login(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, "true")?;
        Ok(())
    }

    fn logout(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Session: passed to views
// ═══════════════════════════════════════════════════════════

/// What a protected view should do on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteDecision {
    Render,
    RedirectToLogin,
}

pub struct Session {
    store: Box<dyn AuthStore>,
}

impl Session {
    pub fn new(store: Box<dyn AuthStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryAuthStore::new()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    pub fn login(&self) -> Result<(), SessionError> {
        self.store.login()?;
        tracing::info!("Session logged in");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.logout()?;
        tracing::info!("Session logged out");
        Ok(())
    }

    pub fn guard(&self) -> RouteDecision {
        if self.is_authenticated() {
            RouteDecision::Render
        } else {
            RouteDecision::RedirectToLogin
        }
    }

    pub fn require_authenticated(&self) -> Result<(), SessionError> {
        match self.guard() {
            RouteDecision::Render => Ok(()),
            RouteDecision::RedirectToLogin => {
                tracing::debug!("Protected view requested while logged out");
                Err(SessionError::NotAuthenticated)
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn new_session_is_logged_out() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());
        assert_eq!(session.guard(), RouteDecision::RedirectToLogin);
        assert!(matches!(
            session.require_authenticated(),
            Err(SessionError::NotAuthenticated)
        ));
    }

    #[test]
    fn login_then_logout() {
        let session = Session::in_memory();
        session.login().unwrap();
        assert_eq!(session.guard(), RouteDecision::Render);
        assert!(session.require_authenticated().is_ok());
        session.logout().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn flag_file_survives_new_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.flag");

        FlagFileAuthStore::new(&path).login().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "true");

        let reopened = FlagFileAuthStore::new(&path);
        assert!(reopened.is_authenticated());
        reopened.logout().unwrap();
        assert!(!path.exists());
        assert!(!reopened.is_authenticated());
    }

    #[test]
    fn flag_file_logout_twice_is_ok() {
        let dir = TempDir::new().unwrap();
        let store = FlagFileAuthStore::new(dir.path().join("session.flag"));
        store.logout().unwrap();
        store.logout().unwrap();
    }

    #[test]
    fn flag_file_with_other_content_is_logged_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.flag");
        fs::write(&path, "false").unwrap();
        assert!(!FlagFileAuthStore::new(&path).is_authenticated());
    }

    #[test]
    fn session_over_flag_file() {
        let dir = TempDir::new().unwrap();
        let session = Session::new(Box::new(FlagFileAuthStore::new(dir.path().join("f"))));
        session.login().unwrap();
        assert!(session.is_authenticated());
    }
}
