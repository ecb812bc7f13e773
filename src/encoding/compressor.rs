use crate::encoding::BitWriter;
use crate::tree::CodeTable;
use std::io::{self, Write};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CompressError {
    #[error("byte {symbol:#04x} has no code, the frequency table was built from different data")]
    UnknownSymbol { symbol: u8 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Rewrite `input` as the concatenation of each byte's code, first code
/// bit first.
///
/// Every input byte must have an entry in `table`; a miss means the caller
/// paired the table with data it was not counted from and fails with
/// [`CompressError::UnknownSymbol`]. The writer is left unflushed so
/// callers can keep appending; [`BitWriter::finish`] pads and flushes.
pub fn compress<W: Write>(
    input: &[u8],
    table: &CodeTable,
    sink: &mut BitWriter<W>,
) -> Result<(), CompressError> {
    for byte in input {
        let code = table
            .code(*byte)
            .ok_or(CompressError::UnknownSymbol { symbol: *byte })?;
        for bit in code {
            sink.write_bit(*bit == 1)?;
        }
    }
    Ok(())
}
