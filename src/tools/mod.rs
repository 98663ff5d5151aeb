//! The tools module provides helper functions for the DNA codec.
//!
//! The tools are:
//! - alphabet: Split raw input into symbols (bytes or UTF-8 characters) and join them back.
//! - cli: Command line interface.
//! - freq_count: Frequency table over every symbol slot.
//!
pub mod alphabet;
pub mod cli;
pub mod freq_count;
