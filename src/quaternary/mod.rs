//! The quaternary module builds the 4-ary Huffman tree and the codes read from it.
//!
//! Huffman coding normally merges the two lightest nodes at a time and labels branches
//! 0 and 1. Here the four lightest nodes are merged at a time and the branches are labelled
//! A, T, C and G, so every code is a short strand of DNA.
//!
//! The tree lives in an arena (`Vec<Node>`) and nodes point at their children by index.
//! It is built once per run, by the encoder and again by the decoder, and only read after
//! that.
//!
pub mod code_assigner;
pub mod node;
pub mod tree_builder;
