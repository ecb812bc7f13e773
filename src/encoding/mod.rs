//! The compression half: frequency counting, code derivation and bit-level
//! emission.

mod bit_writer;
mod compressor;

pub use bit_writer::BitWriter;
pub use compressor::{compress, CompressError};

use crate::frequency::FrequencyTable;
use crate::tree::{self, CodeTable, TreeBuildError};
use std::io::{self, Read, Write};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error(transparent)]
    TreeBuild(#[from] TreeBuildError),
    #[error(transparent)]
    Compress(#[from] CompressError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Compress `input` into `output`, persisting the frequency table to
/// `frequency_sink` on the way.
///
/// Returns the number of input bytes consumed. The compressed stream
/// carries no length of its own, so this value is what a caller hands to
/// [`crate::decode`] to cut the expansion off at the true end of data.
/// An empty input fails with [`TreeBuildError::EmptyInput`].
pub fn encode<R, W, F>(mut input: R, output: W, frequency_sink: F) -> Result<u64, EncodeError>
where
    R: Read,
    W: Write,
    F: Write,
{
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let frequencies = FrequencyTable::count_bytes(&data);
    frequencies.serialize(frequency_sink)?;

    let huffman_tree = tree::build(&frequencies)?;
    let table = CodeTable::derive(&huffman_tree);
    tracing::debug!(
        input_bytes = data.len(),
        distinct_symbols = table.len(),
        "derived prefix codes"
    );

    let mut sink = BitWriter::new(output);
    compress(&data, &table, &mut sink)?;
    sink.finish()?;

    Ok(data.len() as u64)
}
