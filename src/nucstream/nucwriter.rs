//! NucWriter: collects the encoded output, barcode first and then the body.

use crate::quaternary::code_assigner::Code;
use crate::quaternary::node::Nuc;

/// Growable buffer of ASCII nucleotides.
#[derive(Debug, Default)]
pub struct NucWriter {
    pub output: Vec<u8>,
}

impl NucWriter {
    /// Create a NucWriter with room for `capacity` nucleotides.
    pub fn new(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
        }
    }

    pub fn out_nuc(&mut self, nuc: Nuc) {
        self.output.push(nuc.as_byte());
    }

    /// Write a fixed token such as a digit pair or the separator.
    pub fn out_token(&mut self, token: &str) {
        self.output.extend_from_slice(token.as_bytes());
    }

    pub fn out_code(&mut self, code: &Code) {
        self.output.extend(code.nucs().iter().map(|n| n.as_byte()));
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Hand back the finished stream.
    pub fn into_inner(self) -> Vec<u8> {
        self.output
    }
}
