use anyhow::Context;
use clap::Parser;
use linestamp::app::{self, AppConfig};
use linestamp::cli::Cli;
use linestamp::config::Settings;
use std::time::Instant;

fn main() {
    let launch = Instant::now();
    let cli = Cli::parse();
    let verbose = cli.verbose;

    app::init_logging(verbose);

    if let Err(e) = run(cli, launch) {
        app::handle_fatal_error(e, verbose);
    }
}

fn run(cli: Cli, launch: Instant) -> anyhow::Result<()> {
    let settings = Settings::discover(cli.config.as_deref()).context("Failed to load settings")?;
    let config = AppConfig::resolve(&cli, &settings)?;
    app::run(&config, launch)?;
    Ok(())
}
