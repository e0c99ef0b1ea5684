use std::cell::RefCell;
use std::rc::Rc;

use invitation_rust::{KeyValueStore, Region, StoreError};

/// Region double that keeps the last markup pushed into it.
#[derive(Clone, Default)]
pub struct RecordingRegion(pub Rc<RefCell<String>>);

impl Region for RecordingRegion {
    fn set_markup(&mut self, markup: &str) {
        *self.0.borrow_mut() = markup.to_string();
    }
}

/// Store double whose writes always fail, for no-partial-persist tests.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io("write refused".into()))
    }
}
