use log::{debug, error, info};

use super::compress::{read_input, write_output};
use crate::barcode::table::deserialize_table;
use crate::error::{DnaError, Result};
use crate::nucstream::nucreader::NucReader;
use crate::quaternary::node::{Node, NodeId, Tree};
use crate::quaternary::tree_builder::build_tree;
use crate::tools::alphabet::Alphabet;
use crate::tools::cli::DnaOpts;
use crate::Symbol;

/// Where the body decoder stands between nucleotides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DecodeState {
    /// At the root, about to start a new code.
    AtRoot,
    /// Inside a code, at an internal node below the root.
    Descending(NodeId),
    /// Input exhausted on a code boundary.
    Done,
}

/// Walk the tree against the body, emitting a symbol each time a leaf is reached.
fn decode_body(tree: &Tree, nr: &mut NucReader<'_>, expected: u64) -> Result<Vec<Symbol>> {
    let mut out = Vec::with_capacity(expected.min(1 << 24) as usize);
    let mut state = DecodeState::AtRoot;

    loop {
        let here = match state {
            DecodeState::AtRoot => tree.root(),
            DecodeState::Descending(id) => id,
            DecodeState::Done => break,
        };
        let loc = nr.loc();
        let nuc = match nr.nuc()? {
            Some(nuc) => nuc,
            None if state == DecodeState::AtRoot => {
                state = DecodeState::Done;
                continue;
            }
            None => return Err(DnaError::TruncatedStream { loc }),
        };

        // The root is always internal, and leaves reset to the root, so `here` has children.
        let next = tree
            .child(here, nuc)
            .ok_or(DnaError::PaddingLeaf { loc })?;
        state = match tree.node(next) {
            Node::Leaf {
                symbol: Some(symbol),
                ..
            } => {
                out.push(*symbol);
                DecodeState::AtRoot
            }
            Node::Leaf { symbol: None, .. } => return Err(DnaError::PaddingLeaf { loc }),
            Node::Internal { .. } => DecodeState::Descending(next),
        };
    }
    Ok(out)
}

/// Decode a full stream (barcode and body) back to symbols.
pub fn decode(stream: &[u8]) -> Result<Vec<Symbol>> {
    let mut nr = NucReader::new(stream);
    let table = deserialize_table(&mut nr)?;
    let expected = table.total();

    let tree = match build_tree(table.nonzero()) {
        Some(tree) => tree,
        None => {
            // Nothing was counted, so there must be no body either.
            if !nr.is_empty() {
                return Err(DnaError::LengthMismatch {
                    expected: 0,
                    found: nr.remaining() as u64,
                });
            }
            return Ok(Vec::new());
        }
    };
    debug!(
        "Rebuilt tree with {} leaves. Body starts at {}.",
        tree.leaf_count(),
        nr.loc()
    );

    let out = decode_body(&tree, &mut nr, expected)?;
    if out.len() as u64 != expected {
        return Err(DnaError::LengthMismatch {
            expected,
            found: out.len() as u64,
        });
    }
    Ok(out)
}

/// Decompress a stream and turn its symbols back into raw data with the given alphabet.
pub fn decompress_bytes(stream: &[u8], alphabet: Alphabet) -> Result<Vec<u8>> {
    let symbols = decode(stream)?;
    alphabet.symbols_to_bytes(&symbols)
}

/// Decompress the input file named in opts into the output file.
pub fn decompress(opts: &DnaOpts) -> Result<()> {
    let stream = read_input(&opts.input)?;
    info!("Read {} nucleotides from {}.", stream.len(), opts.input);

    let data = decompress_bytes(&stream, opts.alphabet).map_err(|e| {
        error!("Fatal error: {} is not a valid dnazip file.", opts.input);
        e
    })?;

    if let Some(output) = &opts.output {
        write_output(output, &data)?;
        info!("Wrote {} bytes to {}.", data.len(), output);
    }
    Ok(())
}

/// Decode the input file named in opts without writing anything.
pub fn test_integrity(opts: &DnaOpts) -> Result<()> {
    let stream = read_input(&opts.input)?;
    let data = decompress_bytes(&stream, opts.alphabet)?;
    info!("{}: ok, {} bytes.", opts.input, data.len());
    Ok(())
}
