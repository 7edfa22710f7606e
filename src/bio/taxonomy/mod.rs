//! Flat taxonomy dumps: decoding, forest construction and subtree output.
//!
//! Data flows one way: text lines are decoded into [`TaxonRecord`]s by a
//! [`RecordReader`], accumulated in a [`ForestBuilder`], linked into a
//! read-only [`Forest`], and finally walked by a [`SubtreeWriter`].

pub mod fields;
pub mod forest;
pub mod format;
pub mod reader;
pub mod writer;

pub use fields::{nth_field, parse_taxon_id, FieldCursor};
pub use forest::{Forest, ForestBuilder, LinkReport, NodeSlot, Preorder};
pub use format::{DecodeError, RecordFormat};
pub use reader::RecordReader;
pub use writer::{SubtreeWriter, PSEUDO_ROOT_ID, PSEUDO_ROOT_NAME, PSEUDO_ROOT_PARENT};

/// Numeric taxon identifier as it appears in the dump.
///
/// Malformed id columns decode to 0 rather than failing, so 0 and negative
/// values are possible and are treated as ordinary ids.
pub type TaxonId = i64;

/// One decoded `(id, parent id, name)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonRecord {
    pub id: TaxonId,
    pub parent_id: TaxonId,
    pub name: String,
}

impl TaxonRecord {
    pub fn new(id: TaxonId, parent_id: TaxonId, name: impl Into<String>) -> Self {
        Self {
            id,
            parent_id,
            name: name.into(),
        }
    }
}
