//! The decompression half: frequency-file parsing, tree reconstruction and
//! the bit-stream walk.

mod bit_reader;
mod expander;

pub use bit_reader::BitReader;
pub use expander::{expand, ExpandError};

use crate::frequency::{FrequencyFileError, FrequencyTable};
use crate::tree::{self, TreeBuildError};
use std::io::{self, Read, Write};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error(transparent)]
    FrequencyFile(#[from] FrequencyFileError),
    #[error(transparent)]
    TreeBuild(#[from] TreeBuildError),
    #[error(transparent)]
    Expand(#[from] ExpandError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Expand `input` into `output`, rebuilding the tree from the frequency
/// table read out of `frequency_source`.
///
/// The table must be the one persisted when the stream was encoded;
/// construction is deterministic, so the identical tree comes back from
/// it. `limit` is the original byte count as returned by [`crate::encode`].
/// Without a limit, expansion runs until the bit stream is exhausted and
/// the zero bits padding the final byte can decode into a few spurious
/// trailing symbols.
///
/// Returns the number of bytes written.
pub fn decode<R, F, W>(
    mut input: R,
    mut output: W,
    frequency_source: F,
    limit: Option<u64>,
) -> Result<u64, DecodeError>
where
    R: Read,
    F: Read,
    W: Write,
{
    let frequencies = FrequencyTable::deserialize(frequency_source)?;
    let huffman_tree = tree::build(&frequencies)?;

    let mut compressed = Vec::new();
    input.read_to_end(&mut compressed)?;
    tracing::debug!(
        compressed_bytes = compressed.len(),
        expected_bytes = limit,
        "expanding bit stream"
    );

    let mut bits = BitReader::new(&compressed);
    let written = expand(&mut bits, &huffman_tree, limit, &mut output)?;
    output.flush()?;
    Ok(written)
}
