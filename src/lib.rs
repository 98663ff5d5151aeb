//! Quaternary Huffman codec that writes data as DNA.
//!
//! Version 0.1.0
//!
//! Compresses any byte (or UTF-8 character) stream into text over the four nucleotides
//! A, T, C and G, using a 4-ary analogue of Huffman coding. Every output starts with a
//! "barcode": the full frequency table of the input, so decompression needs nothing but
//! the encoded file itself.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> dnazip compress test.txt test.dna`
//!
//! and to get it back:
//!
//! `$> dnazip decompress test.dna test.txt`
//!
//! The same transforms are available in memory through [`compress_bytes`] and
//! [`decompress_bytes`].
//!
pub mod barcode;
pub mod compression;
pub mod error;
pub mod nucstream;
pub mod quaternary;
pub mod tools;

pub use compression::compress::compress_bytes;
pub use compression::decompress::decompress_bytes;
pub use error::{DnaError, Result};
pub use tools::alphabet::Alphabet;

/// A single input symbol: a byte value or a Unicode scalar value.
pub type Symbol = u32;
