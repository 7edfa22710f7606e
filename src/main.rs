use clap::Parser;
use colored::*;
use std::process;
use taxoprune::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Usage errors exit with 1 like every other failure; help and version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    // Initialize logging with TAXOPRUNE_LOG environment variable support
    let log_level =
        std::env::var("TAXOPRUNE_LOG").unwrap_or_else(|_| cli.default_log_level().to_string());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    if let Err(e) = taxoprune::cli::run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
