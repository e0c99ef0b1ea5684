use chrono::Utc;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use crate::render::{message_list_markup, Region};
use crate::store::{KeyValueStore, StoreError};

use super::error::SubmitError;
use super::message::{next_id, Message};
use super::validation::validate;

/// Fixed durable key for the serialized message collection.
pub const STORAGE_KEY: &str = "wedding-messages";

/// Event fired after a successful submission (payload: the new record id).
pub const SUBMITTED_EVENT: &str = "message:submitted";

/// The guestbook store: the in-memory Message Collection and the only access
/// path to its durable key.
///
/// The collection is ordered newest first. Submissions persist the whole
/// serialized collection *before* replacing the in-memory sequence, so a
/// failed write leaves both copies on the old state and no partial write is
/// ever observable.
pub struct GuestbookStore<S: KeyValueStore> {
    store: S,
    messages: Vec<Message>,
    #[cfg(feature = "emitter")]
    emitter: EventEmitter,
}

impl<S: KeyValueStore> GuestbookStore<S> {
    pub fn new(store: S) -> Self {
        GuestbookStore {
            store,
            messages: Vec::new(),
            #[cfg(feature = "emitter")]
            emitter: EventEmitter::new(),
        }
    }

    /// Read the durable value into memory. An absent value is an empty
    /// collection; an unparseable value is logged and treated as empty (the
    /// stored bytes stay in place until the next successful submission).
    pub fn load(&mut self) -> Result<(), StoreError> {
        match self.store.get(STORAGE_KEY)? {
            None => self.messages.clear(),
            Some(raw) => match serde_json::from_str::<Vec<Message>>(&raw) {
                Ok(messages) => self.messages = messages,
                Err(err) => {
                    log::warn!(
                        "stored guestbook value under {:?} is not parseable, starting empty: {}",
                        STORAGE_KEY,
                        err
                    );
                    self.messages.clear();
                }
            },
        }
        Ok(())
    }

    /// Validate, record, and persist a submission. On success the new record
    /// sits at the head of the collection and is returned so the caller can
    /// clear its input fields.
    pub fn submit(&mut self, raw_author: &str, raw_body: &str) -> Result<&Message, SubmitError> {
        let (author, body) = validate(raw_author, raw_body)?;

        let now = Utc::now();
        let id = next_id(now.timestamp_millis(), self.messages.first().map(|m| m.id));
        let message = Message::new(id, author, body, now);

        let mut next = Vec::with_capacity(self.messages.len() + 1);
        next.push(message);
        next.extend(self.messages.iter().cloned());

        let serialized =
            serde_json::to_string(&next).map_err(|e| StoreError::Serde(e.to_string()))?;
        self.store.set(STORAGE_KEY, &serialized)?;
        self.messages = next;

        #[cfg(feature = "emitter")]
        self.emitter.emit(SUBMITTED_EVENT, id.to_string());

        Ok(&self.messages[0])
    }

    /// The collection, newest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Render the collection into a display region as escaped markup.
    pub fn render_into(&self, region: &mut dyn Region) {
        region.set_markup(&message_list_markup(&self.messages));
    }

    /// Register a listener for guestbook events such as [`SUBMITTED_EVENT`].
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn store_with_backing() -> (GuestbookStore<InMemoryStore>, InMemoryStore) {
        let backing = InMemoryStore::new();
        (GuestbookStore::new(backing.clone()), backing)
    }

    #[test]
    fn load_absent_value_is_empty() {
        let (mut guestbook, _) = store_with_backing();
        guestbook.load().unwrap();
        assert!(guestbook.is_empty());
    }

    #[test]
    fn submit_prepends_and_persists() {
        let (mut guestbook, backing) = store_with_backing();
        guestbook.load().unwrap();

        guestbook.submit("Alice", "Congrats!").unwrap();
        guestbook.submit("Bob", "Yay").unwrap();

        assert_eq!(guestbook.len(), 2);
        assert_eq!(guestbook.messages()[0].author, "Bob");
        assert_eq!(guestbook.messages()[1].author, "Alice");
        assert!(guestbook.messages()[0].id > guestbook.messages()[1].id);

        let raw = backing.get(STORAGE_KEY).unwrap().unwrap();
        let stored: Vec<Message> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, guestbook.messages());
    }

    #[test]
    fn submit_trims_inputs() {
        let (mut guestbook, _) = store_with_backing();
        let message = guestbook.submit("  Alice ", " Congrats! \n").unwrap();
        assert_eq!(message.author, "Alice");
        assert_eq!(message.body, "Congrats!");
    }

    #[test]
    fn rejected_submission_mutates_nothing() {
        let (mut guestbook, backing) = store_with_backing();
        guestbook.submit("Alice", "Congrats!").unwrap();
        let before = backing.get(STORAGE_KEY).unwrap();

        assert!(guestbook.submit("", "hello").is_err());
        assert!(guestbook.submit("Alice", "").is_err());
        assert!(guestbook.submit(&"A".repeat(21), "ok").is_err());
        assert!(guestbook.submit("Alice", &"B".repeat(201)).is_err());

        assert_eq!(guestbook.len(), 1);
        assert_eq!(backing.get(STORAGE_KEY).unwrap(), before);
    }

    #[test]
    fn reload_reconstructs_identical_sequence() {
        let (mut guestbook, backing) = store_with_backing();
        guestbook.submit("Alice", "Congrats!").unwrap();
        guestbook.submit("Bob", "Yay").unwrap();
        let committed = guestbook.messages().to_vec();

        let mut reloaded = GuestbookStore::new(backing);
        reloaded.load().unwrap();
        assert_eq!(reloaded.messages(), committed.as_slice());
    }

    #[test]
    fn load_unparseable_value_is_empty_and_recoverable() {
        let (mut guestbook, backing) = store_with_backing();
        backing.set(STORAGE_KEY, "{{ definitely not json").unwrap();

        guestbook.load().unwrap();
        assert!(guestbook.is_empty());

        // The store stays usable; the next submission replaces the bad value.
        guestbook.submit("Alice", "Congrats!").unwrap();
        let raw = backing.get(STORAGE_KEY).unwrap().unwrap();
        let stored: Vec<Message> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn ids_strictly_increase_within_one_millisecond() {
        let (mut guestbook, _) = store_with_backing();
        for i in 0..5 {
            guestbook.submit(format!("Guest {}", i).as_str(), "hi").unwrap();
        }
        let ids: Vec<i64> = guestbook.messages().iter().map(|m| m.id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[cfg(feature = "emitter")]
    #[test]
    fn successful_submit_emits_event() {
        use std::sync::mpsc;

        let (mut guestbook, _) = store_with_backing();
        let (tx, rx) = mpsc::channel::<String>();
        guestbook.on(SUBMITTED_EVENT, move |payload: String| {
            tx.send(payload).unwrap();
        });

        let id = guestbook.submit("Alice", "Congrats!").unwrap().id;
        assert_eq!(rx.recv().unwrap(), id.to_string());
    }

    #[cfg(feature = "emitter")]
    #[test]
    fn rejected_submit_emits_nothing() {
        use std::sync::mpsc;

        let (mut guestbook, _) = store_with_backing();
        let (tx, rx) = mpsc::channel::<String>();
        guestbook.on(SUBMITTED_EVENT, move |payload: String| {
            tx.send(payload).unwrap();
        });

        assert!(guestbook.submit("", "").is_err());
        assert!(rx.try_recv().is_err());
    }
}
