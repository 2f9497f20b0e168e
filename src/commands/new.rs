use anyhow::Result;
use dialoguer::Input;
use eventpro_core::EventForm;
use eventpro_core::config::EventProConfig;
use eventpro_core::event::parse_event_date;
use owo_colors::OwoColorize;
use tracing::warn;

use crate::render::render_dashboard;
use crate::utils::prompt::optional_input;

use super::{open_dashboard, today};

/// Fields given on the command line. Anything missing is prompted for when
/// the name or date is missing.
pub struct NewArgs {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub budget: Option<String>,
    pub desc: Option<String>,
}

pub fn run(config: &EventProConfig, args: NewArgs) -> Result<()> {
    let interactive = args.name.is_none() || args.date.is_none();

    // --- Name ---
    let name = match args.name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Name")
            .allow_empty(true)
            .interact_text()?,
    };

    // --- Date ---
    let date = match args.date {
        Some(d) => normalize_date(&d),
        None => {
            let input: String = Input::new()
                .with_prompt("  When?")
                .allow_empty(true)
                .interact_text()?;
            normalize_date(&input)
        }
    };

    // --- Remaining fields ---
    let time = field_or_prompt(args.time, "Time", interactive)?;
    let venue = field_or_prompt(args.venue, "Where?", interactive)?;
    let budget = field_or_prompt(args.budget, "Budget", interactive)?;
    let desc = field_or_prompt(args.desc, "Description", interactive)?;

    let form = EventForm {
        name,
        date,
        time,
        venue,
        budget,
        desc,
    };

    let mut dashboard = open_dashboard(config)?;
    let event = dashboard.create(form)?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", event.name).green());
    println!();
    println!(
        "{}",
        render_dashboard(dashboard.events(), today(), &config.date_format)
    );

    Ok(())
}

fn field_or_prompt(value: Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if interactive => optional_input(prompt),
        None => Ok(String::new()),
    }
}

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    lower_words(input)
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| full.to_string())
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn lower_words(input: &str) -> impl Iterator<Item = String> + '_ {
    input.split_whitespace().map(str::to_lowercase)
}

/// Turn user input into a YYYY-MM-DD date where possible.
///
/// Dates already in a stored format are kept as typed. Natural language
/// ("tomorrow", "fri", "march 20") is resolved with fuzzydate. Anything
/// else is stored literally; it will show as an invalid date.
fn normalize_date(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || parse_event_date(trimmed).is_some() {
        return trimmed.to_string();
    }

    match fuzzydate::parse(&expand_abbreviations(trimmed)) {
        Ok(dt) => dt.date().format("%Y-%m-%d").to_string(),
        Err(_) => {
            warn!(input = %input, "Could not understand date, storing it as typed");
            input.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    // --- expand_abbreviations ---

    #[test]
    fn expand_day_abbreviations() {
        assert_eq!(expand_abbreviations("sat"), "saturday");
        assert_eq!(expand_abbreviations("next fri"), "next friday");
        assert_eq!(expand_abbreviations("Tues"), "tuesday");
    }

    #[test]
    fn expand_month_abbreviations() {
        assert_eq!(expand_abbreviations("jan 20"), "january 20");
        assert_eq!(expand_abbreviations("sept 5"), "september 5");
    }

    #[test]
    fn expand_preserves_non_abbreviations() {
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
        assert_eq!(expand_abbreviations("  next   friday "), "next friday");
    }

    // --- normalize_date ---

    #[test]
    fn iso_dates_are_kept() {
        assert_eq!(normalize_date("2099-01-01"), "2099-01-01");
        assert_eq!(normalize_date(" 2026-10-16 "), "2026-10-16");
    }

    #[test]
    fn empty_date_stays_empty() {
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("   "), "");
    }

    #[test]
    fn natural_language_becomes_iso() {
        let normalized = normalize_date("tomorrow");
        assert!(parse_event_date(&normalized).is_some());
    }

    #[test]
    fn abbreviated_month_resolves() {
        let normalized = normalize_date("mar 20");
        let date = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").unwrap();
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 20);
    }

    #[test]
    fn gibberish_is_stored_literally() {
        assert_eq!(normalize_date("not a date at all xyz"), "not a date at all xyz");
    }
}
