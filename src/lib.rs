pub mod bio;
pub mod cli;
pub mod core;
pub mod utils;

pub use crate::bio::taxonomy::{
    Forest, ForestBuilder, RecordFormat, RecordReader, SubtreeWriter, TaxonId, TaxonRecord,
};
pub use crate::core::{config::Config, pruner::PruneSummary, pruner::SubtreePruner};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaxopruneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed line {line}: {message}")]
    MalformedLine { line: usize, message: String },

    #[error("Taxon \"{0}\" not found")]
    TaxonNotFound(String),

    #[error("Taxon \"{0}\" has no children. That is not much of a tree")]
    ChildlessTaxon(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TaxopruneError>;
