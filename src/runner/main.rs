use clap::{Parser, Subcommand};
use colored::Colorize;
use once_cell::sync::Lazy;

#[macro_use]
mod utils;
mod commands;
mod meta;

/// Sorting algorithm benchmark runner
#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Run(commands::run::RunArgs),
    Stats(commands::stats::StatsArgs),
    Plot(commands::plot::PlotArgs),
    Report(commands::report::ReportArgs),
}

static CMD_ARGS: Lazy<Cli> = Lazy::new(|| {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    Cli::parse()
});

fn main() -> anyhow::Result<()> {
    let args = &*CMD_ARGS;
    env_logger::init();
    let result = match &args.command {
        Commands::Run(cmd) => cmd.run(),
        Commands::Stats(cmd) => cmd.run(),
        Commands::Plot(cmd) => cmd.run(),
        Commands::Report(cmd) => cmd.run(),
    };
    if let Err(err) = result {
        eprintln!("❌ {}: {}", "ERROR".red().bold(), format!("{:#}", err).red());
        std::process::exit(1);
    }
    Ok(())
}
