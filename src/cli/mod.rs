pub mod prune;

pub use prune::run;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "taxoprune",
    version,
    about = "Extract the subtree under a named taxon from a flat taxonomy dump",
    long_about = "Taxoprune reads a taxonomy dump (tab-separated Catalogue of Life style export, \
                  or pre-processed id,parent,name triples), finds the first taxon with the given \
                  name and writes it and all of its descendants as id,parent_id,name records \
                  under a synthetic '1,0,root' record."
)]
pub struct Cli {
    /// Taxonomy dump to read (.gz files are decompressed)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Name of the taxon whose descendants will be retained
    #[arg(value_name = "TAXON")]
    pub taxon: String,

    /// Output file for the pruned records
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Input has already been processed into id,parent,name triples
    #[arg(short = 'p', long = "triples")]
    pub triples: bool,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "TAXOPRUNE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Gzip the output regardless of its extension
    #[arg(long)]
    pub compress: bool,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log filter used when neither TAXOPRUNE_LOG nor RUST_LOG is set
    pub fn default_log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            _ => "trace",
        }
    }
}
