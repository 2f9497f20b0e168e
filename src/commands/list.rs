use anyhow::Result;
use eventpro_core::config::EventProConfig;

use crate::render::render_events;

use super::{open_dashboard, today};

pub fn run(config: &EventProConfig, json: bool) -> Result<()> {
    let dashboard = open_dashboard(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(dashboard.events())?);
        return Ok(());
    }

    println!(
        "{}",
        render_events(dashboard.events(), today(), &config.date_format)
    );

    Ok(())
}
