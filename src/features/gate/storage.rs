//! Persisted key-value capability used by the session store. The browser
//! implementation wraps `window.localStorage`; tests swap in an in-memory
//! backend. Values stored here are public markers, never secrets.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Origin-scoped key-value storage that survives reloads.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, or nothing when the host has no window or storage
/// is disabled.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn open() -> Self {
        let inner = web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten();
        if inner.is_none() {
            tracing::debug!("localStorage is not available");
        }
        Self { inner }
    }

    pub fn unavailable() -> Self {
        Self { inner: None }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner.as_ref().ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
fn backend_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(format!("{err:?}"))
}

#[cfg(target_arch = "wasm32")]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(backend_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(backend_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(backend_error)
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStorage;
