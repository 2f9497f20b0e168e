//! Aggregate figures shown above the event list.

use chrono::NaiveDate;
use serde::Serialize;

use crate::event::Event;

/// Dashboard totals. Always recomputed from the full collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub upcoming: usize,
    pub completed: usize,
    pub total_budget: f64,
}

impl Stats {
    pub fn compute(events: &[Event], today: NaiveDate) -> Self {
        let total = events.len();
        let upcoming = events.iter().filter(|e| e.is_upcoming(today)).count();
        let total_budget = events.iter().map(Event::budget_or_zero).sum();

        Stats {
            total,
            upcoming,
            completed: total - upcoming,
            total_budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventStatus;

    fn event(id: u64, date: &str, budget: f64) -> Event {
        Event {
            id,
            name: format!("Event {id}"),
            date: date.to_string(),
            time: "10:00".to_string(),
            venue: "HQ".to_string(),
            budget,
            desc: String::new(),
            status: EventStatus::Pending,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn empty_collection() {
        assert_eq!(Stats::compute(&[], today()), Stats::default());
    }

    #[test]
    fn single_future_event() {
        let stats = Stats::compute(&[event(1, "2099-01-01", 500.0)], today());

        assert_eq!(stats.total, 1);
        assert_eq!(stats.upcoming, 1);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.total_budget, 500.0);
    }

    #[test]
    fn event_dated_yesterday_is_completed() {
        let stats = Stats::compute(&[event(1, "2026-10-15", 0.0)], today());

        assert_eq!(stats.total, 1);
        assert_eq!(stats.upcoming, 0);
        assert_eq!(stats.completed, 1);
    }

    #[test]
    fn event_dated_today_is_upcoming() {
        let stats = Stats::compute(&[event(1, "2026-10-16", 0.0)], today());

        assert_eq!(stats.upcoming, 1);
        assert_eq!(stats.completed, 0);
    }

    #[test]
    fn totals_add_up_for_mixed_collections() {
        let events = vec![
            event(1, "2099-01-01", 100.0),
            event(2, "2020-05-05", 250.5),
            event(3, "not a date", 49.5),
            event(4, "2026-10-17", f64::NAN),
            event(5, "2026-10-16", 0.0),
        ];
        let stats = Stats::compute(&events, today());

        assert_eq!(stats.total, 5);
        assert_eq!(stats.upcoming + stats.completed, stats.total);
        assert_eq!(stats.upcoming, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.total_budget, 400.0);
    }
}
