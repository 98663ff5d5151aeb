//! NucReader: a cursor over an encoded nucleotide stream.
//!
//! The barcode is read two nucleotides at a time, the body one at a time. Both come off
//! the same cursor so positions in error messages are absolute offsets into the stream.
//!

use super::NUC_PAIR;
use crate::error::{DnaError, Result};
use crate::quaternary::node::Nuc;

/// Reads an in-memory nucleotide stream front to back.
#[derive(Debug)]
pub struct NucReader<'a> {
    source: &'a [u8],
    cursor: usize,
}

impl<'a> NucReader<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self { source, cursor: 0 }
    }

    /// Return the next nucleotide, Ok(None) at the end of the stream, or an error if the
    /// next byte is not A, T, C or G.
    pub fn nuc(&mut self) -> Result<Option<Nuc>> {
        match self.source.get(self.cursor) {
            None => Ok(None),
            Some(&byte) => {
                let nuc = Nuc::from_byte(byte).ok_or(DnaError::InvalidNucleotide {
                    byte,
                    loc: self.cursor,
                })?;
                self.cursor += 1;
                Ok(Some(nuc))
            }
        }
    }

    /// Look at the next two raw bytes without consuming them.
    pub fn peek_pair(&self) -> Option<&'a [u8]> {
        self.source.get(self.cursor..self.cursor + NUC_PAIR)
    }

    /// Return and consume the next two raw bytes, or None if fewer than two are left.
    pub fn pair(&mut self) -> Option<&'a [u8]> {
        let pair = self.peek_pair()?;
        self.cursor += NUC_PAIR;
        Some(pair)
    }

    /// Current offset into the stream.
    pub fn loc(&self) -> usize {
        self.cursor
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.source.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod test {
    use super::NucReader;
    use crate::quaternary::node::Nuc;

    #[test]
    fn nuc_test() {
        let mut nr = NucReader::new(b"ATCG");
        assert_eq!(nr.nuc().unwrap(), Some(Nuc::A));
        assert_eq!(nr.nuc().unwrap(), Some(Nuc::T));
        assert_eq!(nr.nuc().unwrap(), Some(Nuc::C));
        assert_eq!(nr.nuc().unwrap(), Some(Nuc::G));
        assert_eq!(nr.nuc().unwrap(), None);
        assert!(nr.is_empty());
    }

    #[test]
    fn bad_nuc_test() {
        let mut nr = NucReader::new(b"AX");
        assert_eq!(nr.nuc().unwrap(), Some(Nuc::A));
        assert!(nr.nuc().is_err());
        assert_eq!(nr.loc(), 1);
    }

    #[test]
    fn pair_test() {
        let mut nr = NucReader::new(b"CATTA");
        assert_eq!(nr.peek_pair(), Some("CA".as_bytes()));
        assert_eq!(nr.pair(), Some("CA".as_bytes()));
        assert_eq!(nr.pair(), Some("TT".as_bytes()));
        assert_eq!(nr.loc(), 4);
        assert_eq!(nr.pair(), None);
        assert_eq!(nr.remaining(), 1);
    }
}
