use std::{fmt::Display, fmt::Formatter};

use crate::error::{DnaError, Result};
use crate::Symbol;

/// How raw input is split into symbols. The choice is not stored in the stream, so the
/// same alphabet must be used to compress and to decompress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// One symbol per byte.
    #[default]
    Bytes,
    /// One symbol per Unicode scalar value. Input must be valid UTF-8.
    Utf8,
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Alphabet {
    pub fn to_symbols(self, data: &[u8]) -> Result<Vec<Symbol>> {
        match self {
            Alphabet::Bytes => Ok(data.iter().map(|&b| Symbol::from(b)).collect()),
            Alphabet::Utf8 => {
                let text = std::str::from_utf8(data).map_err(|_| DnaError::InvalidUtf8)?;
                Ok(text.chars().map(Symbol::from).collect())
            }
        }
    }

    pub fn symbols_to_bytes(self, symbols: &[Symbol]) -> Result<Vec<u8>> {
        match self {
            Alphabet::Bytes => symbols
                .iter()
                .map(|&s| u8::try_from(s).map_err(|_| DnaError::InvalidSymbol(s)))
                .collect(),
            Alphabet::Utf8 => {
                let mut out = String::with_capacity(symbols.len());
                for &s in symbols {
                    out.push(char::from_u32(s).ok_or(DnaError::InvalidSymbol(s))?);
                }
                Ok(out.into_bytes())
            }
        }
    }
}
