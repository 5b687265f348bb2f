use std::collections::BTreeMap;
use tracing::trace;

/// A node in a path trie; leaves carry a file's size in bytes.
#[derive(Debug, Default)]
pub struct TrieNode {
    pub children: BTreeMap<String, TrieNode>,
    pub size: Option<usize>,
}

impl TrieNode {
    /// Total bytes in the subtree.
    pub fn total_size(&self) -> usize {
        self.size.unwrap_or(0)
            + self
                .children
                .values()
                .map(TrieNode::total_size)
                .sum::<usize>()
    }
}

/// Relative `/` separated paths arranged as a tree.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    pub fn insert(&mut self, path: &str, size: usize) {
        trace!("Inserting path into trie: {} ({} bytes)", path, size);
        let mut current = &mut self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current.children.entry(segment.to_owned()).or_default();
        }
        current.size = Some(size);
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}
