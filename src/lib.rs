#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

//! A Huffman compressor and expander for arbitrary byte streams.
//!
//! Huffman coding assigns every byte of the input a prefix-free bit code:
//! frequent bytes get short codes, rare bytes long ones, and no code is a
//! prefix of another, so the concatenated codes can be walked back without
//! separators.
//!
//! Compression runs the input through [`frequency::FrequencyTable`] →
//! [`tree::build`] → [`tree::CodeTable`] → [`encoding::compress`], and
//! persists the frequency table to a sidecar file on the way. Decompression
//! parses the sidecar table, rebuilds the identical tree with the same
//! deterministic algorithm, and lets [`decoding::expand`] walk the
//! compressed bits back into bytes.
//!
//! The compressed stream is raw bits with no header and no stored length.
//! [`encode`] returns the original byte count; hand it back to [`decode`]
//! to reproduce the input exactly despite the zero bits padding the final
//! byte.

pub mod decoding;
pub mod encoding;
pub mod frequency;
pub mod tree;


pub use decoding::{decode, DecodeError};
pub use encoding::{encode, EncodeError};

/// Number of distinct symbols, fixed regardless of which bytes occur.
pub const ALPHABET_SIZE: usize = 256;
