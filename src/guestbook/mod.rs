//! Guestbook - the persisted collection of congratulatory messages.
//!
//! The store owns an ordered, newest-first collection of records mirrored to a
//! durable [`KeyValueStore`](crate::store::KeyValueStore) under one fixed key.
//! Submissions are validated by pure functions, persisted whole before the
//! in-memory sequence is replaced, and never edited or deleted afterwards.
//!
//! ## Example
//!
//! ```ignore
//! use invitation_rust::{GuestbookStore, InMemoryStore};
//!
//! let mut guestbook = GuestbookStore::new(InMemoryStore::new());
//! guestbook.load()?;
//! let message = guestbook.submit("Alice", "Congratulations!")?;
//! assert_eq!(message.author, "Alice");
//! ```

mod error;
mod input;
mod message;
mod store;
mod validation;

pub use error::{SubmitError, ValidationError};
pub use input::{editor_action, EditorAction, EditorKey};
pub use message::Message;
pub use store::{GuestbookStore, STORAGE_KEY, SUBMITTED_EVENT};
pub use validation::{validate, validate_author, validate_body, MAX_AUTHOR_LEN, MAX_BODY_LEN};
