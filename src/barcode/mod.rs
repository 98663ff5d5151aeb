//! The barcode module writes and reads the frequency table that opens every encoded stream.
//!
//! Layout:
//! - the domain size, then a separator
//! - one count per symbol slot, each followed by a separator
//!
//! Integers are decimal, one nucleotide pair per digit (see [`digits::DIGITS`]), and the
//! separator is "TT". Because the whole table travels with the data, the decoder needs no
//! outside knowledge to rebuild the coding tree.
//!
pub mod digits;
pub mod table;
