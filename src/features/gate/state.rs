//! Password session context for the frontend. The provider builds the session
//! store once, hydrates it after mount, and exposes the phase as a signal for
//! the gate and the layout. Only the boolean marker is persisted.

use crate::app_lib::{AppError, config::AppConfig};
use crate::features::gate::{
    secret::AccessSecret,
    session::{Session, SessionPhase},
    storage::BrowserStorage,
};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Password session context shared through Leptos.
pub struct PasswordContext {
    session: StoredValue<Session<BrowserStorage>, LocalStorage>,
    phase: RwSignal<SessionPhase>,
}

impl PasswordContext {
    /// Builds a context around the provided session store.
    fn new(session: Session<BrowserStorage>) -> Self {
        Self {
            phase: RwSignal::new(session.phase()),
            session: StoredValue::new_local(session),
        }
    }

    /// Current phase; tracked when read inside a reactive scope.
    pub fn phase(&self) -> SessionPhase {
        self.phase.get()
    }

    fn hydrate(&self) {
        if let Some(phase) = self.session.try_update_value(|session| session.hydrate()) {
            self.phase.set(phase);
        }
    }

    /// Checks `candidate` against the shared secret. `Err` only when the
    /// session store is gone, e.g. after the provider unmounted.
    pub fn authenticate(&self, candidate: &str) -> Result<bool, AppError> {
        let (accepted, phase) = self
            .session
            .try_update_value(|session| (session.authenticate(candidate), session.phase()))
            .ok_or_else(|| AppError::Session("session store is no longer available".to_string()))?;
        self.phase.set(phase);
        Ok(accepted)
    }

    /// Locks the app again and clears the persisted marker.
    pub fn logout(&self) {
        if let Some(phase) = self.session.try_update_value(|session| {
            session.logout();
            session.phase()
        }) {
            self.phase.set(phase);
        }
    }
}

fn build_session(storage: BrowserStorage) -> Session<BrowserStorage> {
    let config = AppConfig::load();
    Session::new(AccessSecret::from_build_env(), storage, config.session_key)
}

/// Provides the password context and hydrates the session once on mount.
#[component]
pub fn PasswordProvider(children: Children) -> impl IntoView {
    let password = PasswordContext::new(build_session(BrowserStorage::open()));
    provide_context(password);

    spawn_local(async move {
        password.hydrate();
    });

    view! { {children()} }
}

/// Returns the current password context or a settled, locked fallback.
pub fn use_password() -> PasswordContext {
    use_context::<PasswordContext>().unwrap_or_else(|| {
        let mut session = build_session(BrowserStorage::unavailable());
        session.hydrate();
        PasswordContext::new(session)
    })
}
