use anyhow::Result;
use eventpro_core::config::EventProConfig;
use eventpro_core::{AlwaysConfirm, Confirm, Dashboard, Deleted, KeyValueStore};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::prompt::TerminalConfirm;

use super::{open_dashboard, today};

pub fn run(config: &EventProConfig, id: u64, yes: bool) -> Result<()> {
    let mut dashboard = open_dashboard(config)?;

    let outcome = if yes {
        remove(&mut dashboard, id, &mut AlwaysConfirm)?
    } else {
        remove(&mut dashboard, id, &mut TerminalConfirm)?
    };

    match outcome {
        Deleted::Removed(event) => {
            println!("{}", format!("  Deleted: {}", event.name).red());
        }
        Deleted::NotFound => return Ok(()),
        Deleted::Declined => {
            println!("{}", "  Kept event".dimmed());
            return Ok(());
        }
    }

    println!();
    println!("{}", dashboard.stats(today()).render());

    Ok(())
}

/// Show the event and ask before deleting it. Unknown ids are reported
/// without prompting and leave the store alone.
fn remove<S: KeyValueStore>(
    dashboard: &mut Dashboard<S>,
    id: u64,
    confirm: &mut impl Confirm,
) -> Result<Deleted> {
    let Some(event) = dashboard.get(id) else {
        println!("{}", format!("  No event with id {}", id).dimmed());
        return Ok(Deleted::NotFound);
    };

    println!("  {} {}", event.name.bold(), format!("#{}", event.id).dimmed());

    Ok(dashboard.delete(id, confirm)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventpro_core::{EventForm, EventProResult, MemoryStore, NeverConfirm};

    /// Counts how often it was asked.
    struct CountingConfirm(usize);

    impl Confirm for CountingConfirm {
        fn confirm(&mut self, _prompt: &str) -> EventProResult<bool> {
            self.0 += 1;
            Ok(true)
        }
    }

    fn dashboard_with_one_event() -> (Dashboard<MemoryStore>, u64) {
        let mut dashboard = Dashboard::load(MemoryStore::new(), "events").unwrap();
        let form = EventForm {
            name: "Launch".to_string(),
            date: "2099-01-01".to_string(),
            ..EventForm::default()
        };
        let id = dashboard.create_at(form, 1_000).unwrap().id;
        (dashboard, id)
    }

    #[test]
    fn unknown_id_is_reported_without_prompting() {
        let (mut dashboard, id) = dashboard_with_one_event();
        let before = dashboard.store().get("events").unwrap();
        let mut confirm = CountingConfirm(0);

        let outcome = remove(&mut dashboard, id + 1, &mut confirm).unwrap();

        assert_eq!(outcome, Deleted::NotFound);
        assert_eq!(confirm.0, 0);
        assert_eq!(dashboard.events().len(), 1);
        assert_eq!(dashboard.store().get("events").unwrap(), before);
    }

    #[test]
    fn known_id_prompts_once_then_deletes() {
        let (mut dashboard, id) = dashboard_with_one_event();
        let mut confirm = CountingConfirm(0);

        let outcome = remove(&mut dashboard, id, &mut confirm).unwrap();

        assert!(matches!(outcome, Deleted::Removed(ref e) if e.id == id));
        assert_eq!(confirm.0, 1);
        assert!(dashboard.is_empty());
    }

    #[test]
    fn declined_prompt_keeps_the_event() {
        let (mut dashboard, id) = dashboard_with_one_event();

        let outcome = remove(&mut dashboard, id, &mut NeverConfirm).unwrap();

        assert_eq!(outcome, Deleted::Declined);
        assert!(dashboard.get(id).is_some());
    }
}
