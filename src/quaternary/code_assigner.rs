//! Assign each leaf its code: the path from the root, spelled in nucleotides.
//!
//! The walk is depth first with a fixed child priority A, T, C, G, so the A chain is always
//! followed to the bottom before any sibling is looked at. Each call to [`CodeWalk::next`]
//! surfaces exactly one leaf (padding leaves included) and never revisits it.

use std::fmt::{Display, Formatter};

use log::trace;
use rustc_hash::FxHashMap;

use super::node::{Node, NodeId, Nuc, Tree};
use crate::Symbol;

/// A root-to-leaf path over {A, T, C, G}.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code(Vec<Nuc>);

impl Code {
    pub fn nucs(&self) -> &[Nuc] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for nuc in &self.0 {
            write!(f, "{}", nuc)?;
        }
        Ok(())
    }
}

/// A leaf surfaced by the walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafCode {
    /// None for padding leaves.
    pub symbol: Option<Symbol>,
    pub freq: u64,
    pub code: Code,
}

/// Iterator over the leaves of a tree in A < T < C < G depth-first order.
///
/// The path travels with each pending node on an explicit stack, so nothing is shared
/// between leaves and the tree itself is left untouched.
pub struct CodeWalk<'t> {
    tree: &'t Tree,
    stack: Vec<(NodeId, Vec<Nuc>)>,
}

impl<'t> CodeWalk<'t> {
    pub fn new(tree: &'t Tree) -> Self {
        CodeWalk {
            tree,
            stack: vec![(tree.root(), Vec::new())],
        }
    }
}

impl<'t> Iterator for CodeWalk<'t> {
    type Item = LeafCode;

    fn next(&mut self) -> Option<LeafCode> {
        let tree = self.tree;
        while let Some((id, path)) = self.stack.pop() {
            match tree.node(id) {
                Node::Leaf { symbol, freq } => {
                    return Some(LeafCode {
                        symbol: *symbol,
                        freq: *freq,
                        code: Code(path),
                    });
                }
                Node::Internal { kids, .. } => {
                    // Push G first so A comes off the stack first.
                    for nuc in Nuc::ALL.iter().rev() {
                        let mut kid_path = Vec::with_capacity(path.len() + 1);
                        kid_path.extend_from_slice(&path);
                        kid_path.push(*nuc);
                        self.stack.push((kids[nuc.slot()], kid_path));
                    }
                }
            }
        }
        None
    }
}

/// Symbol to code lookup, built once per run.
#[derive(Clone, Debug, Default)]
pub struct CodeBook {
    codes: FxHashMap<Symbol, Code>,
}

impl CodeBook {
    /// Walk the tree once and record the code of every real leaf.
    pub fn from_tree(tree: &Tree) -> Self {
        let mut codes = FxHashMap::default();
        for leaf in CodeWalk::new(tree) {
            if let Some(symbol) = leaf.symbol {
                trace!("{:>8} : {:<4} : {}", symbol, leaf.freq, leaf.code);
                codes.insert(symbol, leaf.code);
            }
        }
        CodeBook { codes }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::quaternary::tree_builder::build_tree;
    use crate::tools::freq_count::FreqTable;

    fn book_for(data: &[u32]) -> (Tree, CodeBook) {
        let table = FreqTable::from_symbols(data);
        let tree = build_tree(table.nonzero()).unwrap();
        let book = CodeBook::from_tree(&tree);
        (tree, book)
    }

    #[test]
    fn single_leaf_code_test() {
        let (_, book) = book_for(&[97, 97, 97, 97]);
        assert_eq!(book.len(), 1);
        assert_eq!(book.get(97).unwrap().to_string(), "G");
    }

    #[test]
    fn walk_order_test() {
        let (tree, _) = book_for(&[1, 1, 1, 1, 2, 2, 2, 3, 3, 4]);
        let codes: Vec<String> = CodeWalk::new(&tree)
            .map(|l| l.code.to_string())
            .collect();
        assert_eq!(codes, vec!["A", "T", "C", "G"]);
        let symbols: Vec<Option<u32>> = CodeWalk::new(&tree).map(|l| l.symbol).collect();
        assert_eq!(symbols, vec![Some(4), Some(3), Some(2), Some(1)]);
    }

    #[test]
    fn hello_codes_test() {
        let data: Vec<u32> = "Hello!".bytes().map(u32::from).collect();
        let (tree, book) = book_for(&data);
        // Leaves in insertion order: ! H e l o plus two placeholders.
        // First merge: pad, pad, !, H. Then e, o, l(2), merged(2).
        assert_eq!(book.get(b'e' as u32).unwrap().to_string(), "A");
        assert_eq!(book.get(b'o' as u32).unwrap().to_string(), "T");
        assert_eq!(book.get(b'l' as u32).unwrap().to_string(), "C");
        assert_eq!(book.get(b'!' as u32).unwrap().to_string(), "GC");
        assert_eq!(book.get(b'H' as u32).unwrap().to_string(), "GG");
        assert_eq!(CodeWalk::new(&tree).count(), tree.leaf_count());
    }

    #[test]
    fn prefix_free_test() {
        let data: Vec<u32> = (0..500_u32).map(|i| (i * i) % 97).collect();
        let (tree, book) = book_for(&data);
        let codes: Vec<String> = CodeWalk::new(&tree)
            .map(|l| l.code.to_string())
            .collect();
        for (i, a) in codes.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{} is a prefix of {}", a, b);
                }
            }
        }
        assert!(book.len() <= codes.len());
    }
}
