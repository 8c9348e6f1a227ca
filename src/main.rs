use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use dayplan::cli::args::{Cli, Commands};
use dayplan::cli::commands;
use dayplan::config::Config;
use dayplan::error::PlannerError;
use dayplan::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        let code = e.downcast_ref::<PlannerError>().map_or(1, PlannerError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    logging::init_logging(&level)?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse(args) => commands::parse(&args, &config, format)?,
        Commands::Draft(args) => commands::draft(&args, &config, format)?,
        Commands::Vocab => commands::vocab(&config, format)?,
        Commands::Completions { shell } => commands::generate_completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
