//! Terminal rendering for EventPro types.
//!
//! Extension traits and helpers that add colored output to eventpro-core
//! types using owo_colors. The HTML view lives in `eventpro_core::html`.

use chrono::NaiveDate;
use eventpro_core::format::{format_currency, format_date};
use eventpro_core::{Event, Stats};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Stats {
    fn render(&self) -> String {
        let budget = format_currency(self.total_budget);
        [
            format!("  {} {}", "Total events:".dimmed(), self.total.bold()),
            format!("  {} {}", "Upcoming:    ".dimmed(), self.upcoming.green()),
            format!("  {} {}", "Completed:   ".dimmed(), self.completed),
            format!("  {} {}", "Total budget:".dimmed(), budget.yellow()),
        ]
        .join("\n")
    }
}

/// Render one event as a short block: title line, details line and
/// description (when there is one).
pub fn render_event(event: &Event, today: NaiveDate, date_format: &str) -> String {
    let (marker, name) = if event.is_upcoming(today) {
        ("●".green().to_string(), event.name.bold().to_string())
    } else {
        ("○".dimmed().to_string(), event.name.dimmed().to_string())
    };
    let id = format!("#{}", event.id);

    let date = format_date(&event.date, date_format);
    let budget = format_currency(event.budget);
    let details: Vec<&str> = [date.as_str(), event.time.as_str(), event.venue.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    let mut lines = vec![
        format!("  {} {} {}", marker, name, id.dimmed()),
        format!("    {} {}", details.join(" · ").dimmed(), budget.yellow()),
    ];

    if event.has_description() {
        lines.push(format!("    {}", event.desc));
    }

    lines.join("\n")
}

/// Render the whole list, newest first.
pub fn render_events(events: &[Event], today: NaiveDate, date_format: &str) -> String {
    if events.is_empty() {
        return "  Your agenda is clear. Ready to create impact?"
            .dimmed()
            .to_string();
    }

    events
        .iter()
        .map(|event| render_event(event, today, date_format))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Stats followed by the event list.
pub fn render_dashboard(events: &[Event], today: NaiveDate, date_format: &str) -> String {
    let stats = Stats::compute(events, today);
    format!(
        "{}\n\n{}",
        stats.render(),
        render_events(events, today, date_format)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventpro_core::EventStatus;

    const FORMAT: &str = "%a, %b %-d, %Y";

    fn event(name: &str, date: &str, desc: &str) -> Event {
        Event {
            id: 42,
            name: name.to_string(),
            date: date.to_string(),
            time: String::new(),
            venue: "HQ".to_string(),
            budget: 1500.0,
            desc: desc.to_string(),
            status: EventStatus::Pending,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn event_block_shows_details_and_skips_empty_parts() {
        let out = render_event(&event("Launch", "2099-01-01", ""), today(), FORMAT);

        assert!(out.contains("Launch"));
        assert!(out.contains("#42"));
        assert!(out.contains("Thu, Jan 1, 2099 · HQ"));
        assert!(out.contains("$1,500.00"));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn description_gets_its_own_line() {
        let out = render_event(&event("Gala", "2020-01-01", "Black tie"), today(), FORMAT);

        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().last().unwrap().contains("Black tie"));
    }

    #[test]
    fn empty_list_message() {
        assert!(render_events(&[], today(), FORMAT).contains("Your agenda is clear"));
    }

    #[test]
    fn dashboard_starts_with_stats() {
        let events = vec![event("Launch", "2099-01-01", "")];
        let out = render_dashboard(&events, today(), FORMAT);

        let stats_pos = out.find("Total events:").unwrap();
        let event_pos = out.find("Launch").unwrap();
        assert!(stats_pos < event_pos);
    }
}
