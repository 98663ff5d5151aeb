//! Build the quaternary coding tree from symbol frequencies.
//!
//! The leaf set is first padded with zero-frequency placeholders until
//! `(leaves - 1) % 3 == 0`. Every merge takes four nodes out and puts one back, so the
//! working set then shrinks by three each pass and ends at exactly one root.
//!
//! Both the encoder and the decoder call this with the same frequencies and must get the
//! same tree back, so ties are broken explicitly by insertion order and never left to the
//! sort.

use std::cmp::Ordering;

use log::{debug, trace};

use super::node::{Node, NodeId, Tree};
use crate::tools::freq_count::FreqEntry;

/// A node waiting in the working set, ordered by frequency then by insertion order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Pending {
    freq: u64,
    order: usize,
    id: NodeId,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.freq
            .cmp(&other.freq)
            .then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Number of placeholder leaves needed so that repeated 4-into-1 merges reach one root.
///
/// A lone leaf is padded to four so the root is always an internal node and every real
/// symbol gets a non-empty code.
pub fn padding_needed(leaves: usize) -> usize {
    match leaves {
        0 => 0,
        1 => 3,
        n => (3 - (n - 1) % 3) % 3,
    }
}

/// Build the tree for every entry with a nonzero count. Returns None if there are none.
///
/// Entries are taken in the order given (ascending symbol order from a [`FreqTable`]), and
/// that order is the tie-break between equal frequencies.
///
/// [`FreqTable`]: crate::tools::freq_count::FreqTable
pub fn build_tree<'a, I>(entries: I) -> Option<Tree>
where
    I: IntoIterator<Item = &'a FreqEntry>,
{
    let mut nodes: Vec<Node> = entries
        .into_iter()
        .filter(|e| e.count > 0)
        .map(|e| Node::Leaf {
            symbol: Some(e.symbol),
            freq: e.count,
        })
        .collect();

    if nodes.is_empty() {
        return None;
    }

    let real = nodes.len();
    let padding = padding_needed(real);
    nodes.extend((0..padding).map(|_| Node::Leaf {
        symbol: None,
        freq: 0,
    }));
    debug!(
        "Building tree from {} leaves ({} real, {} padding).",
        nodes.len(),
        real,
        padding
    );

    // Working set. Insertion order doubles as the arena index for the leaves.
    let mut tree: Vec<Pending> = nodes
        .iter()
        .enumerate()
        .map(|(id, n)| Pending {
            freq: n.freq(),
            order: id,
            id,
        })
        .collect();
    let mut next_order = tree.len();

    // Pare it down to one single node with child nodes - keep it sorted.
    while tree.len() > 1 {
        tree.sort_unstable();

        let kids = [tree[0], tree[1], tree[2], tree[3]];
        tree.drain(..4);

        let freq: u64 = kids.iter().map(|k| k.freq).sum();
        let id = nodes.len();
        nodes.push(Node::Internal {
            freq,
            kids: [kids[0].id, kids[1].id, kids[2].id, kids[3].id],
        });
        trace!(
            "Merged {:?} into node {} with frequency {}.",
            kids.iter().map(|k| k.freq).collect::<Vec<u64>>(),
            id,
            freq
        );

        tree.push(Pending {
            freq,
            order: next_order,
            id,
        });
        next_order += 1;
    }

    let root = tree[0].id;
    debug!("Tree has {} nodes.", nodes.len());
    Some(Tree::from_parts(nodes, root))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::quaternary::node::Nuc;

    fn entries(counts: &[(u32, u64)]) -> Vec<FreqEntry> {
        counts
            .iter()
            .map(|&(symbol, count)| FreqEntry { symbol, count })
            .collect()
    }

    /// Check every internal node's frequency against its children.
    fn sums_hold(tree: &Tree) -> bool {
        tree.nodes().all(|n| match n {
            Node::Internal { freq, kids } => {
                *freq == kids.iter().map(|&k| tree.node(k).freq()).sum::<u64>()
            }
            Node::Leaf { .. } => true,
        })
    }

    #[test]
    fn padding_test() {
        assert_eq!(padding_needed(0), 0);
        assert_eq!(padding_needed(1), 3);
        assert_eq!(padding_needed(2), 2);
        assert_eq!(padding_needed(3), 1);
        assert_eq!(padding_needed(4), 0);
        assert_eq!(padding_needed(5), 2);
        assert_eq!(padding_needed(7), 0);
        for n in 2..200 {
            assert_eq!((n + padding_needed(n) - 1) % 3, 0, "leaves: {}", n);
        }
    }

    #[test]
    fn empty_test() {
        assert!(build_tree(&entries(&[])).is_none());
        assert!(build_tree(&entries(&[(1, 0), (2, 0)])).is_none());
    }

    #[test]
    fn single_leaf_test() {
        let tree = build_tree(&entries(&[(b'a' as u32, 4)])).unwrap();
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.len(), 5);
        let root = tree.root();
        assert!(!tree.node(root).is_leaf());
        assert_eq!(tree.node(root).freq(), 4);
        // The three placeholders sort first, so the real leaf takes the last slot.
        let g = tree.child(root, Nuc::G).unwrap();
        assert_eq!(
            tree.node(g),
            &Node::Leaf {
                symbol: Some(b'a' as u32),
                freq: 4
            }
        );
    }

    #[test]
    fn merge_order_test() {
        let tree = build_tree(&entries(&[(1, 4), (2, 3), (3, 2), (4, 1)])).unwrap();
        let root = tree.root();
        assert_eq!(tree.node(root).freq(), 10);
        let symbols: Vec<Option<u32>> = Nuc::ALL
            .iter()
            .map(|&nuc| match tree.node(tree.child(root, nuc).unwrap()) {
                Node::Leaf { symbol, .. } => *symbol,
                Node::Internal { .. } => None,
            })
            .collect();
        assert_eq!(symbols, vec![Some(4), Some(3), Some(2), Some(1)]);
    }

    #[test]
    fn ties_keep_insertion_order_test() {
        let tree = build_tree(&entries(&[(10, 1), (11, 1), (12, 1), (13, 1)])).unwrap();
        let root = tree.root();
        for (nuc, symbol) in Nuc::ALL.iter().zip(10..) {
            let kid = tree.child(root, *nuc).unwrap();
            assert_eq!(
                tree.node(kid),
                &Node::Leaf {
                    symbol: Some(symbol),
                    freq: 1
                }
            );
        }
    }

    #[test]
    fn merged_node_sorts_after_equal_test() {
        // Four 1s merge into a 4, which must land after the existing leaf of weight 4.
        let tree = build_tree(&entries(&[
            (0, 1),
            (1, 1),
            (2, 1),
            (3, 1),
            (4, 4),
            (5, 4),
            (6, 4),
        ]))
        .unwrap();
        let root = tree.root();
        assert_eq!(tree.node(root).freq(), 16);
        let last = tree.child(root, Nuc::G).unwrap();
        assert!(!tree.node(last).is_leaf());
        assert_eq!(tree.node(last).freq(), 4);
    }

    #[test]
    fn hello_tree_test() {
        let tree = build_tree(&entries(&[
            (b'!' as u32, 1),
            (b'H' as u32, 1),
            (b'e' as u32, 1),
            (b'l' as u32, 2),
            (b'o' as u32, 1),
        ]))
        .unwrap();
        assert_eq!((tree.leaf_count() - 1) % 3, 0);
        assert_eq!(tree.leaf_count(), 7);
        assert_eq!(tree.node(tree.root()).freq(), 6);
        assert!(sums_hold(&tree));
    }

    #[test]
    fn deterministic_test() {
        let e: Vec<FreqEntry> = (0..300_u32)
            .map(|s| FreqEntry {
                symbol: s,
                count: (s as u64 * 7919) % 13,
            })
            .collect();
        let a = build_tree(&e).unwrap();
        let b = build_tree(&e).unwrap();
        assert_eq!(a, b);
        assert_eq!((a.leaf_count() - 1) % 3, 0);
        assert!(sums_hold(&a));
    }
}
