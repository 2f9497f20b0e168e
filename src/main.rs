mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventpro_core::config::EventProConfig;
use tracing_subscriber::EnvFilter;

use commands::new::NewArgs;

#[derive(Parser)]
#[command(name = "eventpro")]
#[command(about = "Plan events, track budgets and render the EventPro dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an event (prompts for anything missing when name or date is omitted)
    New {
        #[arg(short, long)]
        name: Option<String>,

        /// Date (e.g. "2025-03-20", "tomorrow", "fri")
        #[arg(short, long)]
        date: Option<String>,

        /// Time of day (e.g. "15:00")
        #[arg(short, long)]
        time: Option<String>,

        #[arg(short, long)]
        venue: Option<String>,

        /// Budget in dollars; anything non-numeric counts as 0
        #[arg(short, long)]
        budget: Option<String>,

        #[arg(long)]
        desc: Option<String>,
    },
    /// List events, newest first
    List {
        /// Print the stored JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Delete an event by id
    Delete {
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show event counts and the total budget
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Render the HTML dashboard
    Render {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the rendered page in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Show where config and data live
    Config,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = EventProConfig::load()?;

    match cli.command {
        Commands::New {
            name,
            date,
            time,
            venue,
            budget,
            desc,
        } => commands::new::run(
            &config,
            NewArgs {
                name,
                date,
                time,
                venue,
                budget,
                desc,
            },
        ),
        Commands::List { json } => commands::list::run(&config, json),
        Commands::Delete { id, yes } => commands::delete::run(&config, id, yes),
        Commands::Stats { json } => commands::stats::run(&config, json),
        Commands::Render { output, open } => commands::html::run(&config, output, open),
        Commands::Config => commands::config::run(&config),
    }
}

/// Log to stderr so stdout stays clean for `--json` and `render`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,eventpro=info,eventpro_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
