//! Core types for EventPro.
//!
//! This crate holds everything the dashboard needs apart from the terminal:
//! - `event` for the event record and the raw form it is built from
//! - `store` for the key-value storage the collection is persisted in
//! - `dashboard` for the controller that ties load, mutate and save together
//! - `stats`, `format` and `html` for the derived views

pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod format;
pub mod html;
pub mod stats;
pub mod store;

pub use dashboard::{AlwaysConfirm, Confirm, Dashboard, Deleted, NeverConfirm};
pub use error::{EventProError, EventProResult};
pub use event::{Event, EventForm, EventStatus};
pub use stats::Stats;
pub use store::{FileStore, KeyValueStore, MemoryStore};
