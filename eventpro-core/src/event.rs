//! The event record and the raw form it is built from.
//!
//! Events are stored exactly as the dashboard persists them: a flat record of
//! text fields plus a numeric id and budget. Dates and times stay as text so
//! that whatever the user typed survives a save/load round-trip untouched.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// A planned event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Identity key, unique within a collection
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// Calendar date, normally YYYY-MM-DD
    #[serde(default)]
    pub date: String,
    /// Time of day, normally HH:MM (display only)
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default, deserialize_with = "budget_or_zero")]
    pub budget: f64,
    /// Free-form description, empty when not given
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub status: EventStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Pending,
}

/// `null` is what a browser writes for a NaN budget.
fn budget_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite()).unwrap_or(0.0))
}

impl Event {
    /// The event's date, if it can be read as YYYY-MM-DD or an RFC 3339 timestamp.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_event_date(&self.date)
    }

    /// Whether the event falls on or after `today`.
    ///
    /// An event dated exactly today is upcoming. Events whose date can't be
    /// read are never upcoming.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.parsed_date().is_some_and(|date| date >= today)
    }

    pub fn is_past(&self, today: NaiveDate) -> bool {
        !self.is_upcoming(today)
    }

    /// Budget with non-finite values treated as zero.
    pub fn budget_or_zero(&self) -> f64 {
        if self.budget.is_finite() { self.budget } else { 0.0 }
    }

    pub fn has_description(&self) -> bool {
        !self.desc.is_empty()
    }
}

pub fn parse_event_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Pick an id for a new event.
///
/// Uses the creation time in milliseconds, bumped past the highest existing
/// id so two events created in the same millisecond still get distinct ids.
pub fn next_id(existing: &[Event], now_ms: u64) -> u64 {
    let floor = existing
        .iter()
        .map(|e| e.id)
        .max()
        .map(|max| max.saturating_add(1))
        .unwrap_or(0);
    now_ms.max(floor)
}

/// Raw text captured from the create form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub name: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub budget: String,
    pub desc: String,
}

impl EventForm {
    /// The budget field as a number, 0 when it is empty or not numeric.
    pub fn budget(&self) -> f64 {
        parse_float_prefix(&self.budget)
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    pub fn into_event(self, id: u64) -> Event {
        let budget = self.budget();
        Event {
            id,
            name: self.name,
            date: self.date,
            time: self.time,
            venue: self.venue,
            budget,
            desc: self.desc,
            status: EventStatus::Pending,
        }
    }
}

/// Read the longest leading decimal number, ignoring leading whitespace and
/// any trailing garbage ("12.5kg" reads as 12.5).
fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - (end + 1);
        digits += frac_digits;
        if frac_digits > 0 || end > int_start {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
