use crate::Symbol;

/// Count of one symbol. The symbol is also its index in the [`FreqTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FreqEntry {
    pub symbol: Symbol,
    pub count: u64,
}

/// Frequency count of every symbol slot from 0 up to the largest symbol seen.
///
/// Unseen symbols keep a count of 0. The whole table, zero counts included, is what the
/// barcode carries, so the decoder learns the domain size from the stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreqTable {
    entries: Vec<FreqEntry>,
}

/// Returns a frequency count of the input data, sized to the largest symbol plus one.
/// Empty input still gets one slot.
pub fn freqs(data: &[Symbol]) -> Vec<u64> {
    let size = data.iter().copied().max().unwrap_or(0) as usize + 1;
    let mut freqs = vec![0_u64; size];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

impl FreqTable {
    pub fn from_symbols(data: &[Symbol]) -> Self {
        Self::from_counts(freqs(data))
    }

    /// Rebuild a table from counts indexed by symbol, as read back from a barcode.
    pub fn from_counts(counts: Vec<u64>) -> Self {
        let entries = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| FreqEntry {
                symbol: i as Symbol,
                count,
            })
            .collect();
        FreqTable { entries }
    }

    /// Number of symbol slots, observed or not.
    pub fn domain_size(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self, symbol: Symbol) -> u64 {
        self.entries
            .get(symbol as usize)
            .map_or(0, |e| e.count)
    }

    /// Every entry in symbol order.
    pub fn entries(&self) -> &[FreqEntry] {
        &self.entries
    }

    /// Entries with a nonzero count, in symbol order. These are the tree's leaves.
    pub fn nonzero(&self) -> impl Iterator<Item = &FreqEntry> {
        self.entries.iter().filter(|e| e.count > 0)
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}
