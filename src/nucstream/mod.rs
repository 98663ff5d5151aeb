//! The nucstream module is the I/O layer between the codec and its encoded text.
//!
//! Encoded output is plain ASCII restricted to A, T, C and G. The writer collects it in
//! memory and the reader walks it with a single cursor. Files are read and written whole
//! by the compression module; nothing here touches the file system.
//!
pub mod nucreader;
pub mod nucwriter;

/// Width in nucleotides of one barcode digit or separator.
pub const NUC_PAIR: usize = 2;
