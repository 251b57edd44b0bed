mod app;
mod cli;
mod color;
mod event;
mod logging;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    logging::init(cli_opts.log_file.as_deref(), cli_opts.log_level)?;

    let settings = cli_opts.settings();
    info!(?settings, "starting");
    let mut app = app::App::new(settings);

    let mut guard = tui::init()?;
    let result = event::run(&mut app, &mut guard.terminal);
    drop(guard);

    result
}
