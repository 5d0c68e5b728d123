// busops: terminal operations dashboard for a municipal bus fleet.
// Parses flags, loads config, sets up logging and the terminal, then runs the app.

mod app;
mod config;
mod error;
mod fleet;
mod logging;
mod state;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, View};
use crate::config::Config;
use crate::fleet::Dataset;
use crate::logging::LogConfig;

#[derive(Debug, Parser)]
#[command(
    name = "busops",
    version,
    about = "Operations dashboard for a municipal bus fleet"
)]
struct Args {
    /// Config file (defaults to the platform config dir, or $BUSOPS_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// View to open on launch: overview, demand, fleet, routes, drivers, settings
    #[arg(long)]
    view: Option<View>,

    /// Start with the sidebar collapsed
    #[arg(long)]
    collapsed: bool,

    /// Log file (defaults to the platform cache dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Layer command-line overrides on top of the loaded config.
    fn apply(&self, config: &mut Config) {
        if let Some(view) = self.view {
            config.initial_view = view;
        }
        if self.collapsed {
            config.sidebar_open = false;
        }
    }

    fn log_config(&self, config: &Config) -> LogConfig {
        LogConfig::from_verbosity(self.verbose, config.log_level.as_deref())
            .with_log_file(self.log_file.clone().or_else(config::paths::log_path))
    }
}

fn main() -> error::Result<()> {
    let args = Args::parse();

    let mut config = config::load(args.config.as_deref())?;
    args.apply(&mut config);

    logging::init_logging(&args.log_config(&config))?;

    tracing::info!(
        view = %config.initial_view,
        sidebar_open = config.sidebar_open,
        tick_rate_ms = config.tick_rate_ms,
        "starting dashboard"
    );

    let mut app = App::new(&config, Dataset::sample());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "dashboard exited with error");
    }
    res?;

    tracing::info!("dashboard closed");
    Ok(())
}
