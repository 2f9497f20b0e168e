use std::path::PathBuf;

use anyhow::{Context, Result};
use eventpro_core::config::EventProConfig;
use eventpro_core::html::render_page;
use owo_colors::OwoColorize;

use super::{open_dashboard, today};

/// File name used when `--open` is given without `--output`.
const DEFAULT_PAGE_NAME: &str = "dashboard.html";

pub fn run(config: &EventProConfig, output: Option<PathBuf>, open_in_browser: bool) -> Result<()> {
    let dashboard = open_dashboard(config)?;
    let today = today();
    let page = render_page(
        dashboard.events(),
        &dashboard.stats(today),
        today,
        &config.date_format,
    );

    let output = match output {
        Some(path) => path,
        None if open_in_browser => config.data_path().join(DEFAULT_PAGE_NAME),
        None => {
            print!("{}", page);
            return Ok(());
        }
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&output, &page)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("{}", format!("  Wrote dashboard to {}", output.display()).green());

    if open_in_browser && open::that(&output).is_err() {
        eprintln!("(Could not open browser automatically, open the file above manually)");
    }

    Ok(())
}
