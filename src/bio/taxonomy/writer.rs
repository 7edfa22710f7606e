/// Writes a pruned subtree as `id,parent_id,name` lines
use super::forest::{Forest, NodeSlot};
use super::TaxonId;
use crate::Result;
use std::io::Write;
use tracing::debug;

/// Synthetic super-root every output tree hangs from
pub const PSEUDO_ROOT_ID: TaxonId = 1;
pub const PSEUDO_ROOT_PARENT: TaxonId = 0;
pub const PSEUDO_ROOT_NAME: &str = "root";

pub struct SubtreeWriter<W: Write> {
    out: W,
}

impl<W: Write> SubtreeWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the pseudo-root, `root` re-parented under it, then every
    /// descendant of `root` in preorder. Returns the number of descendants.
    ///
    /// Names are written as-is; a name containing a comma makes its line
    /// ambiguous to split.
    pub fn write_subtree(&mut self, forest: &Forest, root: NodeSlot) -> Result<u64> {
        self.write_record(PSEUDO_ROOT_ID, PSEUDO_ROOT_PARENT, PSEUDO_ROOT_NAME)?;

        let top = forest.node(root);
        self.write_record(top.id, PSEUDO_ROOT_ID, &top.name)?;

        let mut written = 0u64;
        for slot in forest.preorder(root) {
            let node = forest.node(slot);
            self.write_record(node.id, node.parent_id, &node.name)?;
            written += 1;
        }

        debug!("Wrote {} descendants of {}", written, top.name);
        Ok(written)
    }

    fn write_record(&mut self, id: TaxonId, parent_id: TaxonId, name: &str) -> Result<()> {
        writeln!(self.out, "{},{},{}", id, parent_id, name)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
