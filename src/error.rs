//! Error type shared by every stage of the codec.
//!
//! Nothing here is retried. Each variant aborts the current compress or decompress call.
use thiserror::Error;

/// Everything that can go wrong while turning bytes into nucleotides and back.
#[derive(Debug, Error)]
pub enum DnaError {
    #[error("Can't read input file {path}: {source}")]
    InputNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt barcode at {loc}: {reason}")]
    CorruptBarcode { loc: usize, reason: String },
    #[error("Stream ended inside a code at {loc}")]
    TruncatedStream { loc: usize },
    #[error("Code at {loc} leads to a padding leaf")]
    PaddingLeaf { loc: usize },
    #[error("Found byte {byte:#04x} at {loc}, expected one of A, T, C, G")]
    InvalidNucleotide { byte: u8, loc: usize },
    #[error("Symbol {0} is not valid in this alphabet")]
    InvalidSymbol(u32),
    #[error("Input is not valid UTF-8")]
    InvalidUtf8,
    #[error("Barcode promised {expected} symbols but the body held {found}")]
    LengthMismatch { expected: u64, found: u64 },
}

pub type Result<T> = std::result::Result<T, DnaError>;

impl DnaError {
    /// Shorthand for the barcode errors raised by the digit and table decoders.
    pub(crate) fn barcode(loc: usize, reason: impl Into<String>) -> Self {
        DnaError::CorruptBarcode {
            loc,
            reason: reason.into(),
        }
    }
}
