use crate::bio::taxonomy::RecordFormat;
use crate::cli::Cli;
use crate::core::config::{default_config, load_config};
use crate::core::pruner::SubtreePruner;
use crate::utils::io::{is_gzip_path, open_input, OutputSink};
use anyhow::Context;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Could not load configuration {}", path.display()))?,
        None => default_config(),
    };

    let format = if cli.triples {
        RecordFormat::Triples
    } else {
        config.reader.default_format
    };
    let compress = cli.compress || config.output.compress || is_gzip_path(&cli.output);

    let input = open_input(&cli.input)
        .with_context(|| format!("Could not open {}", cli.input.display()))?;
    let mut output = OutputSink::create(&cli.output, compress)
        .with_context(|| format!("Could not open {}", cli.output.display()))?;

    let spinner = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    };
    spinner.set_message(format!("Reading {} ({} format)...", cli.input.display(), format));

    let pb = spinner.clone();
    let pruner = SubtreePruner::new(config)
        .with_format(format)
        .with_progress_callback(move |records| pb.set_message(format!("Read {} records", records)));

    let result = pruner.prune(input, &cli.taxon, &mut output);
    spinner.finish_and_clear();
    let summary = result?;

    output
        .finish()
        .with_context(|| format!("Could not write {}", cli.output.display()))?;

    if !cli.quiet {
        eprintln!(
            "{} {} taxa under \"{}\" written to {} ({} records read, {} non unique names)",
            "✓".green().bold(),
            summary.descendants_written + 1,
            cli.taxon,
            cli.output.display(),
            summary.records_read,
            summary.duplicate_names,
        );
    }

    Ok(())
}
