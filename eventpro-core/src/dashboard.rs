//! The dashboard controller.
//!
//! Owns the event collection and the store it is persisted in. Every
//! mutation rewrites the whole collection under one key; there is no
//! incremental persistence.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::constants::{CREATED_MESSAGE, DELETE_PROMPT, NOTIFY_PREFIX};
use crate::error::EventProResult;
use crate::event::{Event, EventForm, next_id};
use crate::stats::Stats;
use crate::store::KeyValueStore;

/// Asks the user a yes/no question before a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> EventProResult<bool>;
}

/// Answers yes without asking.
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> EventProResult<bool> {
        Ok(true)
    }
}

/// Answers no without asking.
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _prompt: &str) -> EventProResult<bool> {
        Ok(false)
    }
}

/// Outcome of [`Dashboard::delete`].
#[derive(Debug, Clone, PartialEq)]
pub enum Deleted {
    Removed(Event),
    NotFound,
    Declined,
}

pub struct Dashboard<S: KeyValueStore> {
    store: S,
    key: String,
    events: Vec<Event>,
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Load the collection stored under `key`.
    ///
    /// A missing entry gives an empty collection, and so does an entry that
    /// can't be parsed. The unreadable value stays in the store until the
    /// next save overwrites it.
    pub fn load(store: S, key: impl Into<String>) -> EventProResult<Self> {
        let key = key.into();

        let events = match store.get(&key)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Event>>(&raw) {
                Ok(events) => events,
                Err(e) => {
                    warn!(key = %key, error = %e, "Stored events are unreadable, starting empty");
                    Vec::new()
                }
            },
        };

        debug!(key = %key, count = events.len(), "Loaded events");

        Ok(Dashboard { store, key, events })
    }

    /// Events, newest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: u64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn stats(&self, today: NaiveDate) -> Stats {
        Stats::compute(&self.events, today)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create an event from a submitted form and put it at the front of the list.
    pub fn create(&mut self, form: EventForm) -> EventProResult<&Event> {
        let now_ms = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.create_at(form, now_ms)
    }

    /// [`Dashboard::create`] with an explicit creation time in epoch milliseconds.
    pub fn create_at(&mut self, form: EventForm, now_ms: u64) -> EventProResult<&Event> {
        let id = next_id(&self.events, now_ms);
        self.events.insert(0, form.into_event(id));

        if let Err(e) = self.save() {
            self.events.remove(0);
            return Err(e);
        }

        info!(id, "{} {}", NOTIFY_PREFIX, CREATED_MESSAGE);

        Ok(&self.events[0])
    }

    /// Delete the event with `id` once `confirm` agrees.
    pub fn delete(&mut self, id: u64, confirm: &mut impl Confirm) -> EventProResult<Deleted> {
        if !confirm.confirm(DELETE_PROMPT)? {
            return Ok(Deleted::Declined);
        }

        let Some(index) = self.events.iter().position(|e| e.id == id) else {
            self.save()?;
            return Ok(Deleted::NotFound);
        };

        let removed = self.events.remove(index);
        if let Err(e) = self.save() {
            self.events.insert(index, removed);
            return Err(e);
        }

        info!(id, "Deleted event");

        Ok(Deleted::Removed(removed))
    }

    /// Overwrite the stored collection with the in-memory one.
    pub fn save(&mut self) -> EventProResult<()> {
        let json = serde_json::to_string(&self.events)?;
        self.store.set(&self.key, &json)?;
        debug!(key = %self.key, count = self.events.len(), "Saved events");
        Ok(())
    }
}
