use anyhow::Result;
use eventpro_core::config::EventProConfig;

use crate::render::Render;

use super::{open_dashboard, today};

pub fn run(config: &EventProConfig, json: bool) -> Result<()> {
    let dashboard = open_dashboard(config)?;
    let stats = dashboard.stats(today());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats.render());
    }

    Ok(())
}
