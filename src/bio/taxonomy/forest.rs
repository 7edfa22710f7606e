/// Id-indexed taxonomy forest backed by a single arena
use super::{TaxonId, TaxonRecord};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Position of a node in the forest arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeSlot(usize);

/// Accumulates records while the dump is being read.
///
/// Every record gets its own arena slot. The id map points at the most recent
/// slot for each id, so a repeated id replaces the earlier record while
/// keeping the position where the id was first seen.
#[derive(Debug, Default)]
pub struct ForestBuilder {
    nodes: Vec<TaxonRecord>,
    slots: IndexMap<TaxonId, NodeSlot>,
}

/// Outcome of [`ForestBuilder::link`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Nodes attached to a parent
    pub linked: usize,
    /// Nodes whose non-zero parent id is not in the forest
    pub orphans: usize,
    /// Nodes declaring themselves as their own parent
    pub self_parented: usize,
    /// Nodes with parent id 0
    pub top_level: usize,
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            slots: IndexMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, record: TaxonRecord) -> NodeSlot {
        let slot = NodeSlot(self.nodes.len());
        let id = record.id;
        self.nodes.push(record);
        if self.slots.insert(id, slot).is_some() {
            debug!("Taxon id {} redefined, keeping the later record", id);
        }
        slot
    }

    /// Number of distinct ids
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: TaxonId) -> Option<NodeSlot> {
        self.slots.get(&id).copied()
    }

    pub fn node(&self, slot: NodeSlot) -> &TaxonRecord {
        &self.nodes[slot.0]
    }

    /// Every record inserted so far in read order, replaced ones included
    pub fn records(&self) -> impl Iterator<Item = &TaxonRecord> + '_ {
        self.nodes.iter()
    }

    /// Attach every live node to its parent's child list.
    ///
    /// Nodes are visited in the order their ids were first seen, so siblings
    /// keep input order. Replaced records are never attached.
    pub fn link(self) -> (Forest, LinkReport) {
        let mut children = vec![Vec::new(); self.nodes.len()];
        let mut report = LinkReport::default();

        for (&id, &slot) in &self.slots {
            let parent_id = self.nodes[slot.0].parent_id;
            if parent_id == id {
                debug!("Taxon {} is its own parent, treating it as top level", id);
                report.self_parented += 1;
                continue;
            }

            match self.slots.get(&parent_id) {
                Some(parent) => {
                    children[parent.0].push(slot);
                    report.linked += 1;
                }
                None if parent_id != 0 => {
                    warn!("Parent {} of taxon {} not registered", parent_id, id);
                    report.orphans += 1;
                }
                None => report.top_level += 1,
            }
        }

        let forest = Forest {
            nodes: self.nodes,
            slots: self.slots,
            children,
        };
        (forest, report)
    }
}

/// Linked, read-only forest
#[derive(Debug)]
pub struct Forest {
    nodes: Vec<TaxonRecord>,
    slots: IndexMap<TaxonId, NodeSlot>,
    children: Vec<Vec<NodeSlot>>,
}

impl Forest {
    /// Number of distinct ids
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: TaxonId) -> Option<NodeSlot> {
        self.slots.get(&id).copied()
    }

    pub fn node(&self, slot: NodeSlot) -> &TaxonRecord {
        &self.nodes[slot.0]
    }

    pub fn children(&self, slot: NodeSlot) -> &[NodeSlot] {
        &self.children[slot.0]
    }

    /// Live nodes in first-seen id order
    pub fn iter(&self) -> impl Iterator<Item = (NodeSlot, &TaxonRecord)> + '_ {
        self.slots.values().map(move |&slot| (slot, &self.nodes[slot.0]))
    }

    /// Strict descendants of `root` in preorder.
    pub fn preorder(&self, root: NodeSlot) -> Preorder<'_> {
        Preorder::new(self, root)
    }
}

/// Iterative preorder walk below a root.
///
/// Children are pushed in reverse so they come off the stack in their
/// original order. Each node has one parent, so any cycle reachable from the
/// root runs through the root itself; the walk never re-enters it.
pub struct Preorder<'a> {
    forest: &'a Forest,
    root: NodeSlot,
    stack: Vec<NodeSlot>,
    cycle_reported: bool,
}

impl<'a> Preorder<'a> {
    fn new(forest: &'a Forest, root: NodeSlot) -> Self {
        let mut walk = Self {
            forest,
            root,
            stack: Vec::new(),
            cycle_reported: false,
        };
        walk.push_children(root);
        walk
    }

    fn push_children(&mut self, slot: NodeSlot) {
        let forest = self.forest;
        for &child in forest.children(slot).iter().rev() {
            if child == self.root {
                if !self.cycle_reported {
                    warn!(
                        "Taxon {} is its own descendant, cutting the cycle",
                        forest.node(self.root).id
                    );
                    self.cycle_reported = true;
                }
                continue;
            }
            self.stack.push(child);
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = NodeSlot;

    fn next(&mut self) -> Option<NodeSlot> {
        let slot = self.stack.pop()?;
        self.push_children(slot);
        Some(slot)
    }
}
