//! The compression module runs the whole codec, in memory or file to file.
//!
//! Compression happens in the following steps:
//! - Frequency count: Count every symbol over the full domain, zeros included.
//! - Tree build: Merge the nonzero counts four at a time into one quaternary tree.
//! - Code assignment: Read each symbol's code off the tree, A before T before C before G.
//! - Output: Write the barcode (the whole frequency table), then each input symbol's code
//!   in input order.
//!
//! Decompression reads the barcode, rebuilds the very same tree, then walks it one
//! nucleotide at a time, emitting a symbol and returning to the root at every leaf.
//!
//! Both directions read the whole input into memory and write the whole output at the end,
//! so a failed run never leaves a partial output file behind.
//!

pub mod compress;
pub mod decompress;
