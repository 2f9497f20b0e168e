use anyhow::Result;
use eventpro_core::config::EventProConfig;
use owo_colors::OwoColorize;

pub fn run(config: &EventProConfig) -> Result<()> {
    let config_path = EventProConfig::config_path()?;
    let store = config.store();
    let events_path = store.path_for(&config.storage_key)?;

    println!("{} {}", "Config file:".dimmed(), config_path.display());
    println!("{} {}", "Data dir:   ".dimmed(), config.data_path().display());
    println!("{} {}", "Events file:".dimmed(), events_path.display());
    println!("{} {}", "Date format:".dimmed(), config.date_format);

    Ok(())
}
