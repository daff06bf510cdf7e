use anyhow::{anyhow, bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use redirectmapper::browser::ChromeEngine;
use redirectmapper::cli::Cli;
use redirectmapper::config::RunConfig;
use redirectmapper::logger::{RunLogger, VerbosityLevel};
use redirectmapper::{export, input, run};

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info,redirectmapper=debug",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate().map_err(|e| anyhow!(e))?;
    init_tracing(cli.verbose);

    let tokens = input::read_tokens(&cli.input_csv)?;
    if tokens.is_empty() {
        bail!("No URLs found in input CSV: {}", cli.input_csv.display());
    }
    println!("Found {} domain(s) to process.", tokens.len());

    let config = RunConfig::from(&cli);

    // Without a working rendering engine no per-input resolution is possible,
    // so a launch failure is fatal — unlike per-input navigation errors.
    let engine = ChromeEngine::launch(config.ignore_https_errors, config.user_agent.clone())?;

    let mut logger = RunLogger::new(VerbosityLevel::from_verbose_count(cli.verbose));
    let records = run::run(&tokens, &engine, &config, &mut logger);

    export::export_csv(&records, &cli.output_csv)?;
    export::print_run_summary(&records, &cli.output_csv);

    Ok(())
}
