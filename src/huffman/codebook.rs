//! Code assignment and sorted codebook lookup.

use std::cmp::Ordering;

use crate::avl::AvlTree;
use crate::error::{Error, Result};
use crate::huffman::{HuffmanNode, HuffmanTree};

/// Codes longer than this cannot be represented.
pub const MAX_CODE_LEN: u32 = 64;

/// A unit value together with its assigned code.
///
/// The code is the path from the root to the value's leaf: descending to the
/// left child appends a 0 bit, to the right a 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub value: u8,
    pub code: u64,
    pub len: u32,
}

type EntryOrder = fn(&CodeEntry, &CodeEntry) -> Ordering;

fn entry_order(a: &CodeEntry, b: &CodeEntry) -> Ordering {
    a.value.cmp(&b.value)
}

/// Sorted mapping from unit value to Huffman code, keyed for O(log n)
/// lookup while packing.
pub struct Codebook {
    entries: AvlTree<CodeEntry, EntryOrder>,
}

impl Codebook {
    /// Walks the tree and records one entry per leaf.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self> {
        from_root(tree.root())
    }

    /// Entry for `value`, if the tree contained it.
    pub fn get(&self, value: u8) -> Option<&CodeEntry> {
        self.entries.get_by(&value, |v, entry| v.cmp(&entry.value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending unit-value order.
    pub fn iter(&self) -> impl Iterator<Item = &CodeEntry> {
        self.entries.iter()
    }
}

pub(crate) fn from_root(root: &HuffmanNode) -> Result<Codebook> {
    if root.is_leaf() {
        // A lone leaf admits no binary codes.
        return Err(Error::BadTreeGiven);
    }
    if root.height() + 1 > MAX_CODE_LEN {
        return Err(Error::MaxCodeLengthReached);
    }
    let mut entries = AvlTree::new(entry_order as EntryOrder);
    fill(root, 0, 0, &mut entries);
    Ok(Codebook { entries })
}

/// Depth-first descent accumulating (code, length); recursion depth is
/// bounded by the height check in [`from_root`].
fn fill(node: &HuffmanNode, code: u64, len: u32, out: &mut AvlTree<CodeEntry, EntryOrder>) {
    match node {
        HuffmanNode::Leaf { value, .. } => {
            out.insert(CodeEntry {
                value: *value,
                code,
                len,
            });
        }
        HuffmanNode::Internal { left, right, .. } => {
            fill(left, code << 1, len + 1, out);
            fill(right, code << 1 | 1, len + 1, out);
        }
    }
}
