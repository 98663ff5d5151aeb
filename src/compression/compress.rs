use std::fs;

use log::{debug, error, info};

use crate::barcode::table::serialize_table;
use crate::error::{DnaError, Result};
use crate::nucstream::nucwriter::NucWriter;
use crate::quaternary::code_assigner::CodeBook;
use crate::quaternary::tree_builder::build_tree;
use crate::tools::alphabet::Alphabet;
use crate::tools::cli::DnaOpts;
use crate::tools::freq_count::FreqTable;
use crate::Symbol;

/// Write the code of every symbol, in input order. A symbol missing from the book is an
/// InvalidSymbol error.
pub(crate) fn encode_body(nw: &mut NucWriter, book: &CodeBook, symbols: &[Symbol]) -> Result<()> {
    for &symbol in symbols {
        let code = book.get(symbol).ok_or_else(|| {
            error!("Symbol {} has no code.", symbol);
            DnaError::InvalidSymbol(symbol)
        })?;
        nw.out_code(code);
    }
    Ok(())
}

/// Encode a symbol sequence as barcode followed by body.
pub fn encode(symbols: &[Symbol]) -> Result<Vec<u8>> {
    let table = FreqTable::from_symbols(symbols);

    // Zero counts stay out of the tree but stay in the barcode.
    let book = match build_tree(table.nonzero()) {
        Some(tree) => {
            debug!(
                "Built tree with {} leaves for {} symbols.",
                tree.leaf_count(),
                table.nonzero().count()
            );
            CodeBook::from_tree(&tree)
        }
        None => CodeBook::default(),
    };

    let mut nw = NucWriter::new(table.domain_size() * 4 + symbols.len() * 2);
    serialize_table(&mut nw, &table);
    let barcode = nw.len();

    encode_body(&mut nw, &book, symbols)?;
    debug!(
        "Barcode is {} nucleotides, body is {} nucleotides.",
        barcode,
        nw.len() - barcode
    );
    Ok(nw.into_inner())
}

/// Compress raw data read with the given alphabet.
pub fn compress_bytes(data: &[u8], alphabet: Alphabet) -> Result<Vec<u8>> {
    let symbols = alphabet.to_symbols(data)?;
    encode(&symbols)
}

/// Read a whole input file. A missing or unreadable file is an InputNotFound error.
pub(crate) fn read_input(path: &str) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| DnaError::InputNotFound {
        path: path.to_string(),
        source,
    })
}

/// Write a whole output file, replacing anything already there.
pub(crate) fn write_output(path: &str, data: &[u8]) -> Result<()> {
    fs::write(path, data)?;
    Ok(())
}

/// Compress the input file named in opts into the output file.
pub fn compress(opts: &DnaOpts) -> Result<()> {
    let data = read_input(&opts.input)?;
    info!("Read {} bytes from {}.", data.len(), opts.input);

    let encoded = compress_bytes(&data, opts.alphabet)?;

    if let Some(output) = &opts.output {
        write_output(output, &encoded)?;
        info!(
            "Wrote {} nucleotides to {} ({:.2} nucleotides per input byte).",
            encoded.len(),
            output,
            encoded.len() as f64 / data.len().max(1) as f64
        );
    }
    Ok(())
}
