pub mod config;
pub mod pruner;

pub use config::Config;
pub use pruner::{PruneSummary, SubtreePruner};
