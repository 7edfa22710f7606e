pub mod taxonomy;

pub use taxonomy::{TaxonId, TaxonRecord};
