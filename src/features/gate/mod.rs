//! Password gate: a persisted "unlocked" flag in `localStorage` and the
//! guard that shows either a loading placeholder, the password form or the
//! wrapped application.
//!
//! Flow Overview: the provider builds the session store with the build-time
//! secret, then hydrates it once after mount. The gate renders from the
//! session phase only. Submitting the form calls `authenticate`; the lock
//! button in the header calls `logout`.
//!
//! This is a soft gate with no server-side counterpart. Never log the secret
//! or the submitted text.

pub(crate) mod form;
#[cfg(target_arch = "wasm32")]
mod guard;
pub(crate) mod secret;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod storage;

#[cfg(target_arch = "wasm32")]
pub(crate) use guard::PasswordGate;
