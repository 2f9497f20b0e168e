pub mod config;
pub mod delete;
pub mod html;
pub mod list;
pub mod new;
pub mod stats;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use eventpro_core::config::EventProConfig;
use eventpro_core::{Dashboard, FileStore};

/// Open the dashboard backed by the configured file store.
pub fn open_dashboard(config: &EventProConfig) -> Result<Dashboard<FileStore>> {
    Dashboard::load(config.store(), config.storage_key.clone()).with_context(|| {
        format!(
            "Failed to load events from {}",
            config.data_path().display()
        )
    })
}

/// The local calendar day used for upcoming/completed classification.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
