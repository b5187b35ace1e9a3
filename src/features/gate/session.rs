//! Session store behind the password gate. It owns the shared secret and a
//! storage backend, starts in the loading phase, and restores the persisted
//! marker exactly once. Storage failures never reach callers: reads count as
//! "locked" and failed writes only cost persistence across reloads.

use super::{secret::AccessSecret, storage::SessionStorage};
use tracing::{debug, info, warn};

/// Value written under the session key while access is granted.
pub const SESSION_MARKER: &str = "true";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Unauthenticated,
    Authenticated,
}

pub struct Session<S> {
    secret: AccessSecret,
    storage: S,
    key: String,
    authenticated: bool,
    loading: bool,
}

impl<S: SessionStorage> Session<S> {
    pub fn new(secret: AccessSecret, storage: S, key: impl Into<String>) -> Self {
        Self {
            secret,
            storage,
            key: key.into(),
            authenticated: false,
            loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Loading
        } else if self.authenticated {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    /// Reads the persisted marker and ends the loading phase. Only the first
    /// call touches storage.
    pub fn hydrate(&mut self) -> SessionPhase {
        if !self.loading {
            return self.phase();
        }

        match self.storage.get(&self.key) {
            Ok(Some(value)) if value == SESSION_MARKER => {
                debug!("restored persisted session");
                self.authenticated = true;
            }
            Ok(_) => debug!("no persisted session"),
            Err(err) => warn!(%err, "failed to read persisted session"),
        }
        self.loading = false;

        self.phase()
    }

    /// Returns `true` and persists the marker when `candidate` is the shared
    /// secret. A mismatch leaves the session untouched.
    pub fn authenticate(&mut self, candidate: &str) -> bool {
        if !self.secret.matches(candidate) {
            info!("access denied");
            return false;
        }

        self.authenticated = true;
        if let Err(err) = self.storage.set(&self.key, SESSION_MARKER) {
            warn!(%err, "failed to persist session");
        }
        info!("access granted");
        true
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        if let Err(err) = self.storage.remove(&self.key) {
            warn!(%err, "failed to clear persisted session");
        }
        info!("session locked");
    }
}
