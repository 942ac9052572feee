//! Persisted sidebar widths.
//!
//! SYSTEM CONTEXT
//! ==============
//! The last width a user dragged a sidebar to is a UX convenience, not
//! application data. Reads and writes are best-effort: [`PersistedWidthStore::get`]
//! and [`PersistedWidthStore::set`] log and swallow every failure, so a
//! missing key, a malformed value, and disabled storage all look the same to
//! the caller. The `try_` variants keep the error for diagnostics.
//!
//! Keys are `user_<id>_lhs_width` / `user_<id>_rhs_width`, values are plain
//! decimal strings with no versioning.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::consts::STORAGE_USER_PREFIX;
use crate::size::Side;

/// Failure reading or writing a persisted width.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No `window`, or `localStorage` is disabled.
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    /// Quota exceeded, private browsing, and similar.
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    /// The stored value is not a non-negative integer.
    #[error("malformed width under {key}: {raw:?}")]
    Malformed { key: String, raw: String },
}

/// String key-value storage the width store writes through.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `window.localStorage`. Only usable on `wasm32` in a browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            _ => Err(StorageError::Unavailable),
        }
    }
}

impl StorageBackend for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read { key: key.to_owned(), reason: format!("{err:?}") })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write { key: key.to_owned(), reason: format!("{err:?}") })
    }
}

/// In-process storage for server rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Storage key for `side`'s width as chosen by `user_id`.
#[must_use]
pub fn storage_key(side: Side, user_id: &str) -> String {
    format!("{STORAGE_USER_PREFIX}{user_id}_{}", side.storage_suffix())
}

/// Last chosen width of one sidebar, per user.
#[derive(Debug)]
pub struct PersistedWidthStore<B> {
    backend: B,
    side: Side,
}

impl<B: StorageBackend> PersistedWidthStore<B> {
    #[must_use]
    pub fn new(backend: B, side: Side) -> Self {
        Self { backend, side }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn key(&self, user_id: &str) -> String {
        storage_key(self.side, user_id)
    }

    /// Stored width for `user_id`, keeping the failure reason.
    pub fn try_get(&self, user_id: &str) -> Result<Option<u32>, StorageError> {
        let key = self.key(user_id);
        let Some(raw) = self.backend.get_item(&key)? else {
            return Ok(None);
        };
        match raw.trim().parse::<u32>() {
            Ok(width) => Ok(Some(width)),
            Err(_) => Err(StorageError::Malformed { key, raw }),
        }
    }

    /// Stored width for `user_id`, or `None` if absent or unreadable.
    #[must_use]
    pub fn get(&self, user_id: &str) -> Option<u32> {
        match self.try_get(user_id) {
            Ok(width) => width,
            Err(err) => {
                log::debug!("ignoring persisted sidebar width: {err}");
                None
            }
        }
    }

    /// Write `width` for `user_id`, keeping the failure reason.
    pub fn try_set(&self, user_id: &str, width: u32) -> Result<(), StorageError> {
        self.backend.set_item(&self.key(user_id), &width.to_string())
    }

    /// Best-effort write of `width` for `user_id`.
    pub fn set(&self, user_id: &str, width: u32) {
        if let Err(err) = self.try_set(user_id, width) {
            log::debug!("could not persist sidebar width: {err}");
        }
    }
}
