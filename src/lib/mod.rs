//! Shared frontend utilities for configuration, errors, logging and build
//! metadata.
//!
//! ## Access flow
//!
//! 1. **Mount:** `PasswordProvider` creates the session store in the loading
//!    state and schedules a single read of `localStorage`.
//! 2. **Hydrate:** a stored `"true"` marker restores access; anything else
//!    leaves the session locked.
//! 3. **Challenge:** `PasswordGate` shows the password form until the shared
//!    secret is entered, then renders the application.
//! 4. **Lock:** the header's lock button clears the marker and returns to the
//!    form.
//!
//! The gate is a UI convenience, not a security boundary. Nothing here may log
//! the shared secret or the text typed into the form.

pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod telemetry;
pub(crate) mod theme;

pub(crate) use errors::AppError;
