use crate::decoding::BitReader;
use crate::tree::Node;
use std::io::{self, Write};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExpandError {
    #[error("compressed stream ended after {got} of {expected} bytes")]
    UnexpectedEnd { got: u64, expected: u64 },
    /// A walk stepped into a missing child. Trees built by
    /// [`crate::tree::build`] cannot produce this (internal nodes own both
    /// children); the variant covers walks over hand-built trees.
    #[error("prefix-code tree is missing a child mid-walk")]
    CorruptTree,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Walk `tree` against the bit stream and emit one byte per completed
/// root-to-leaf path.
///
/// Stops after `limit` bytes when one is given, otherwise runs until the
/// stream is exhausted. Compression zero-pads the final byte, so an
/// unlimited expansion may walk up to seven padding bits past the true end
/// of data: a partial walk is abandoned silently, but padding that spells
/// out complete codes produces spurious trailing bytes. Callers that know
/// the original length pass it as `limit`; a stream that dries up before
/// reaching it fails with [`ExpandError::UnexpectedEnd`].
///
/// Returns the number of bytes written.
pub fn expand<W: Write>(
    bits: &mut BitReader<'_>,
    tree: &Node,
    limit: Option<u64>,
    sink: &mut W,
) -> Result<u64, ExpandError> {
    let mut written = 0u64;

    if let Node::Leaf { symbol, .. } = tree {
        // A lone leaf has no branches to walk. Every occurrence was written
        // as the one-bit code 0, so each emitted byte consumes one bit and
        // exhaustion still terminates the loop.
        while limit.map_or(true, |limit| written < limit) && bits.read_bit().is_some() {
            sink.write_all(&[*symbol])?;
            written += 1;
        }
    } else {
        let mut current = tree;
        while limit.map_or(true, |limit| written < limit) {
            match current {
                Node::Leaf { symbol, .. } => {
                    sink.write_all(&[*symbol])?;
                    written += 1;
                    current = tree;
                }
                Node::Internal { left, right, .. } => match bits.read_bit() {
                    Some(false) => current = left.as_ref(),
                    Some(true) => current = right.as_ref(),
                    None => break,
                },
            }
        }
    }

    match limit {
        Some(expected) if written < expected => {
            Err(ExpandError::UnexpectedEnd { got: written, expected })
        }
        _ => Ok(written),
    }
}
