//! HTML rendering of the dashboard.
//!
//! Everything here is a pure function of the collection and the current
//! date: the whole list is regenerated on each call, so rendering the same
//! input twice yields byte-identical markup.

use chrono::NaiveDate;

use crate::event::Event;
use crate::format::{escape_html, format_currency, format_date};
use crate::stats::Stats;

const EMPTY_STATE_IMAGE: &str =
    "https://cdni.iconscout.com/illustration/premium/thumb/no-data-found-8867280-7221008.png?f=webp";

const EMPTY_STATE_TEXT: &str = "Your agenda is clear. Ready to create impact?";

/// Render the event list container contents.
pub fn render_events(events: &[Event], today: NaiveDate, date_format: &str) -> String {
    if events.is_empty() {
        return render_empty_state();
    }

    events
        .iter()
        .map(|event| render_event_card(event, today, date_format))
        .collect()
}

fn render_empty_state() -> String {
    format!(
        r#"
<div class="empty-state">
    <img src="{EMPTY_STATE_IMAGE}" alt="No data" style="width: 150px; opacity: 0.3; margin-bottom: 20px;">
    <p>{EMPTY_STATE_TEXT}</p>
</div>
"#
    )
}

fn render_event_card(event: &Event, today: NaiveDate, date_format: &str) -> String {
    let icon = if event.is_past(today) { "fa-history" } else { "fa-calendar-day" };

    let description = if event.has_description() {
        format!(
            r#"<p class="event-description">{}</p>"#,
            escape_html(&event.desc)
        )
    } else {
        String::new()
    };

    format!(
        r#"
<div class="event-card anim-slide-in" data-id="{id}">
    <div class="event-status-icon">
        <i class="fas {icon}"></i>
    </div>
    <div class="event-main">
        <h3>{name}</h3>
        <div class="event-meta">
            <span><i class="far fa-calendar-alt"></i> {date}</span>
            <span><i class="far fa-clock"></i> {time}</span>
            <span><i class="fas fa-map-pin"></i> {venue}</span>
            <span class="budget-pill"><i class="fas fa-wallet"></i> {budget}</span>
        </div>
        {description}
    </div>
    <div class="event-actions">
        <button class="btn-delete" title="Delete with: eventpro delete {id}" data-id="{id}" disabled>
            <i class="fas fa-trash-alt"></i>
        </button>
    </div>
</div>
"#,
        id = event.id,
        name = escape_html(&event.name),
        date = escape_html(&format_date(&event.date, date_format)),
        time = escape_html(&event.time),
        venue = escape_html(&event.venue),
        budget = format_currency(event.budget),
    )
}

/// Render the four stat cards.
pub fn render_stats(stats: &Stats) -> String {
    let cards = [
        ("totalEvents", "Total Events", "fa-layer-group", stats.total.to_string()),
        ("upcomingEvents", "Upcoming", "fa-hourglass-half", stats.upcoming.to_string()),
        ("completedEvents", "Completed", "fa-check-circle", stats.completed.to_string()),
        ("totalBudget", "Total Budget", "fa-coins", format_currency(stats.total_budget)),
    ];

    let mut html = String::from("<section class=\"stats-grid\">\n");
    for (id, label, icon, value) in cards {
        html.push_str(&format!(
            r#"    <div class="stat-card">
        <i class="fas {icon}"></i>
        <span class="stat-label">{label}</span>
        <span class="stat-value" id="{id}">{value}</span>
    </div>
"#
        ));
    }
    html.push_str("</section>\n");
    html
}

/// The create form. A rendered page is a static snapshot, so its controls
/// are disabled; events are created with `eventpro new`.
fn render_form() -> &'static str {
    r#"<form id="eventForm" class="event-form">
<fieldset disabled>
    <input type="text" id="eventName" placeholder="Event name" required>
    <input type="date" id="eventDate" required>
    <input type="time" id="eventTime">
    <input type="text" id="eventVenue" placeholder="Venue">
    <input type="number" id="eventBudget" placeholder="Budget" min="0" step="0.01">
    <textarea id="eventDesc" placeholder="Description"></textarea>
    <button type="submit">Create Event</button>
</fieldset>
</form>
"#
}

/// Render a standalone HTML document with the form, stats and event list.
pub fn render_page(events: &[Event], stats: &Stats, today: NaiveDate, date_format: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>EventPro Dashboard</title>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
</head>
<body>
<header><h1>EventPro</h1></header>
<main>
{stats}{form}<div id="eventsContainer">{events}</div>
</main>
</body>
</html>
"#,
        stats = render_stats(stats),
        form = render_form(),
        events = render_events(events, today, date_format),
    )
}
