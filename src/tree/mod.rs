//! The binary prefix-code tree: deterministic construction from a
//! frequency table, and per-symbol code derivation.
//!
//! Construction is a greedy minimum-pair merge over a forest of leaves.
//! The scan order and the left/right assignment on merges are fixed, so
//! the encoder and the decoder rebuild bit-identical trees from the same
//! frequency table.

mod builder;
mod code_table;

pub use builder::{build, build_with_observer, Node, TreeBuildError};
pub use code_table::CodeTable;
