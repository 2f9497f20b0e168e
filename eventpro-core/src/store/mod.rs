//! Key-value storage for the event collection.
//!
//! The dashboard only ever reads or overwrites a whole value under a single
//! key, so the store interface is flat: get and set.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::EventProResult;

/// A flat string-to-string store.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if nothing was ever stored there.
    fn get(&self, key: &str) -> EventProResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> EventProResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> EventProResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> EventProResult<()> {
        (**self).set(key, value)
    }
}
