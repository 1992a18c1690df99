//! Session holder
//!
//! Explicit session object owned by the navigation shell. Constructed
//! on sign-in, overwritten by a new sign-in, and dropped on sign-out
//! rather than left stale. No expiry and no token: session identity is
//! the username the backend accepted.

use chrono::{DateTime, Utc};

/// Identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub signed_in_at: DateTime<Utc>,
}

/// Process-wide holder for the current session.
///
/// Written by the login screen, read by the dashboard and profile
/// screens. All access happens on the one UI task, so no interior
/// locking is carried.
#[derive(Debug, Default)]
pub struct SessionHolder {
    current: Option<Session>,
}

impl SessionHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful sign-in, replacing any previous session.
    pub fn sign_in(&mut self, username: impl Into<String>) -> &Session {
        self.current.insert(Session {
            username: username.into(),
            signed_in_at: Utc::now(),
        })
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Username for the dashboard welcome banner and the profile fetch
    pub fn username(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.username.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// Invalidate the session instead of leaving it stale.
    pub fn sign_out(&mut self) -> Option<Session> {
        self.current.take()
    }
}
