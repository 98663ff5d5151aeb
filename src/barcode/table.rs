//! Barcode framing of a whole frequency table.

use log::debug;

use super::digits::{decode_integer, write_integer, DIGITS, SEPARATOR};
use crate::error::{DnaError, Result};
use crate::nucstream::nucreader::NucReader;
use crate::nucstream::nucwriter::NucWriter;
use crate::tools::freq_count::FreqTable;

/// Fewest nucleotides one table entry can take: a single digit plus the separator.
const MIN_ENTRY: usize = DIGITS[0].len() + SEPARATOR.len();

/// Write the barcode: the domain size, then every count in symbol order, zeros included.
pub fn serialize_table(nw: &mut NucWriter, table: &FreqTable) {
    let start = nw.len();
    write_integer(nw, table.domain_size() as u64);
    for entry in table.entries() {
        write_integer(nw, entry.count);
    }
    debug!(
        "Barcode holds {} slots in {} nucleotides.",
        table.domain_size(),
        nw.len() - start
    );
}

/// Read a barcode back into a frequency table, leaving the reader at the start of the body.
pub fn deserialize_table(nr: &mut NucReader<'_>) -> Result<FreqTable> {
    let loc = nr.loc();
    let domain = decode_integer(nr)?;
    // Refuse sizes the rest of the stream could not possibly hold before allocating.
    let room = (nr.remaining() / MIN_ENTRY) as u64;
    if domain > room {
        return Err(DnaError::barcode(
            loc,
            format!(
                "domain size {} does not fit in the remaining {} nucleotides",
                domain,
                nr.remaining()
            ),
        ));
    }

    // The decoder sums the counts, so the total must fit as well as each count.
    let mut counts = Vec::with_capacity(domain as usize);
    let mut total = 0_u64;
    for _ in 0..domain {
        let loc = nr.loc();
        let count = decode_integer(nr)?;
        total = total
            .checked_add(count)
            .ok_or_else(|| DnaError::barcode(loc, "counts overflow"))?;
        counts.push(count);
    }
    debug!("Read barcode with {} slots.", counts.len());
    Ok(FreqTable::from_counts(counts))
}
