//! Durable key-value storage - the persistence seam for the page.
//!
//! A `KeyValueStore` holds whole serialized values under string keys, the way
//! browser-local storage does: one `get`/`set` per value, no partial reads or
//! writes. `InMemoryStore` backs tests and embedded use; `FileStore` persists
//! the map to a single JSON file across process restarts.
//!
//! ## Example
//!
//! ```ignore
//! use invitation_rust::{InMemoryStore, KeyValueStore};
//!
//! let store = InMemoryStore::new();
//! store.set("greeting", "hello")?;
//! assert_eq!(store.get("greeting")?.as_deref(), Some("hello"));
//! ```

mod file;
mod in_memory;

use std::fmt;

/// Abstract whole-value key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`. Returns None if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value as one unit.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A lock guarding the store was poisoned.
    LockPoisoned(&'static str),
    /// The backing medium could not be read or written.
    Io(String),
    /// The backing medium held data that could not be decoded.
    Serde(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Io(msg) => write!(f, "store io error: {}", msg),
            StoreError::Serde(msg) => write!(f, "store decode error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub use file::FileStore;
pub use in_memory::InMemoryStore;
