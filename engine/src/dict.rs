//! Arena-backed prefix tree keyed by the 27-symbol alphabet.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::DictError;

/// Opaque handle to a node inside a [`Dict`].
///
/// Only meaningful for the dictionary that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

#[derive(Debug, Clone)]
struct DictNode {
    children: [Option<NodeId>; ALPHABET_LEN],
    // Back-reference for upward walks only; ownership stays with `children`.
    parent: Option<NodeId>,
    is_word: bool,
    frequency: u32,
}

impl DictNode {
    fn new(parent: Option<NodeId>) -> Self {
        Self {
            children: [None; ALPHABET_LEN],
            parent,
            is_word: false,
            frequency: 0,
        }
    }
}

/// Word-frequency dictionary over a prefix tree.
///
/// Nodes live in an append-only arena and are created lazily as words
/// are inserted; the root is the empty prefix. Dropping the `Dict`
/// tears the whole tree down at once.
#[derive(Debug, Clone)]
pub struct Dict {
    nodes: Vec<DictNode>,
}

impl Default for Dict {
    fn default() -> Self {
        Self::new()
    }
}

impl Dict {
    /// Creates an empty dictionary holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![DictNode::new(None)],
        }
    }

    /// The node for the empty prefix.
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Inserts `word`, creating missing path nodes as needed.
    ///
    /// Returns `Ok(true)` on the word's first insertion and `Ok(false)`
    /// when it was already present; the terminal frequency is bumped on
    /// both branches. The word is validated up front, so a malformed
    /// symbol leaves the tree untouched.
    pub fn insert(&mut self, word: &str) -> Result<bool, DictError> {
        let slots = validate(word)?;

        let mut current = ROOT;
        for slot in slots {
            current = match self.nodes[current.0].children[slot] {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(DictNode::new(Some(current)));
                    self.nodes[current.0].children[slot] = Some(child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current.0];
        node.frequency = node.frequency.saturating_add(1);
        if node.is_word {
            Ok(false)
        } else {
            node.is_word = true;
            Ok(true)
        }
    }

    /// Resolves `word` to its terminal node.
    ///
    /// `Ok(None)` when the path is missing or when it exists only as an
    /// internal prefix of longer words.
    pub fn lookup(&self, word: &str) -> Result<Option<NodeId>, DictError> {
        let slots = validate(word)?;
        Ok(self.walk(&slots).filter(|&node| self.nodes[node.0].is_word))
    }

    /// Whether `node` terminates an inserted word.
    pub fn is_word(&self, node: NodeId) -> bool {
        self.nodes[node.0].is_word
    }

    /// How many insertions have reached `node` as their terminal.
    pub fn frequency(&self, node: NodeId) -> u32 {
        self.nodes[node.0].frequency
    }

    /// Total insertions across all words (cumulative, not distinct).
    pub fn word_count(&self) -> u64 {
        self.nodes
            .iter()
            .filter(|node| node.is_word)
            .map(|node| u64::from(node.frequency))
            .sum()
    }

    /// Every node in the tree, root included.
    pub fn node_count(&self) -> usize {
        // The arena is append-only, so every allocated node is live.
        self.nodes.len()
    }

    /// The highest frequency among word-complete nodes; 0 when the
    /// dictionary holds no words.
    pub fn most_common_frequency(&self) -> u32 {
        self.nodes
            .iter()
            .filter(|node| node.is_word)
            .map(|node| node.frequency)
            .max()
            .unwrap_or(0)
    }

    /// Edge distance between two nodes through their lowest common
    /// ancestor.
    ///
    /// Both handles must come from this dictionary. Either side absent
    /// counts as distance 0 rather than an error.
    pub fn ancestor_distance(&self, a: Option<NodeId>, b: Option<NodeId>) -> usize {
        let (Some(a), Some(b)) = (a, b) else { return 0 };

        let path_a = self.path_to_root(a);
        let path_b = self.path_to_root(b);

        // Trim the shared root-side tail; what remains on each side is
        // the depth below the lowest common ancestor.
        let mut i = path_a.len();
        let mut j = path_b.len();
        while i > 0 && j > 0 && path_a[i - 1] == path_b[j - 1] {
            i -= 1;
            j -= 1;
        }
        i + j
    }

    /// Greedy one-symbol continuation of `prefix`.
    ///
    /// Scans the child slots in alphabet order (apostrophe last) and
    /// returns the first child that is itself word-complete. A missing
    /// prefix path, or one whose children are all internal nodes,
    /// yields `Ok(None)`. Deeper words are deliberately not searched.
    pub fn suggest_continuation(&self, prefix: &str) -> Result<Option<char>, DictError> {
        let slots = validate(prefix)?;
        let Some(node) = self.walk(&slots) else {
            return Ok(None);
        };

        let continuation = self.nodes[node.0]
            .children
            .iter()
            .enumerate()
            .find_map(|(slot, &child)| match child {
                Some(c) if self.nodes[c.0].is_word => Some(alphabet::symbol_at(slot)),
                _ => None,
            });
        Ok(continuation)
    }

    fn walk(&self, slots: &[usize]) -> Option<NodeId> {
        let mut current = ROOT;
        for &slot in slots {
            current = self.nodes[current.0].children[slot]?;
        }
        Some(current)
    }

    fn path_to_root(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        let mut current = node;
        while let Some(parent) = self.nodes[current.0].parent {
            path.push(parent);
            current = parent;
        }
        path
    }
}

fn validate(s: &str) -> Result<Vec<usize>, DictError> {
    s.char_indices()
        .map(|(position, symbol)| {
            alphabet::slot_of(symbol).ok_or(DictError::InvalidSymbol { symbol, position })
        })
        .collect()
}
