//! Symbol frequency counting and the sidecar frequency-file format.
//!
//! The frequency file is line-oriented ASCII: one line per symbol value
//! 0..=255 in ascending order, `<binary-index>:<count>`. The binary index
//! carries no information on read-back; only the line position does.

use crate::ALPHABET_SIZE;
use std::io::{self, BufRead, BufReader, Read, Write};

/// Occurrence counts for every possible byte value.
///
/// The table always spans the full 256-symbol alphabet; bytes that never
/// occur keep a count of zero. Built once, by counting or by parsing a
/// persisted file, and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FrequencyFileError {
    #[error("line {line} is missing the ':' separator")]
    MissingSeparator { line: usize },
    #[error("line {line} does not end in a non-negative integer count")]
    InvalidCount { line: usize },
    #[error("frequency file has more than {max} lines")]
    TooManyLines { max: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl FrequencyTable {
    /// Count every byte of `input` in one pass.
    pub fn count_bytes(input: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for byte in input {
            counts[usize::from(*byte)] += 1;
        }
        FrequencyTable { counts }
    }

    /// Total number of counted bytes. A tree built from this table carries
    /// this value as its root count.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True when no symbol has a positive count.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    pub fn counts(&self) -> &[u64; ALPHABET_SIZE] {
        &self.counts
    }

    /// Write the table as 256 `<binary-index>:<count>` lines.
    ///
    /// The index is rendered without leading zero padding, so line 5 starts
    /// with `101:` and line 0 with `0:`.
    pub fn serialize<W: Write>(&self, mut sink: W) -> io::Result<()> {
        for (symbol, count) in self.counts.iter().enumerate() {
            writeln!(sink, "{:b}:{}", symbol, count)?;
        }
        Ok(())
    }

    /// Parse a table back from its line format.
    ///
    /// The count is whatever follows the last `:` of a line and lands at
    /// the line's 0-based position; the binary prefix is not re-validated.
    /// A source with fewer than 256 lines leaves the remaining counts at
    /// zero; tolerated, though writers always emit all 256 lines.
    pub fn deserialize<R: Read>(source: R) -> Result<Self, FrequencyFileError> {
        let mut counts = [0u64; ALPHABET_SIZE];
        for (line_idx, line) in BufReader::new(source).lines().enumerate() {
            let line = line?;
            if line_idx >= ALPHABET_SIZE {
                return Err(FrequencyFileError::TooManyLines { max: ALPHABET_SIZE });
            }
            let (_, count) = line
                .rsplit_once(':')
                .ok_or(FrequencyFileError::MissingSeparator { line: line_idx })?;
            counts[line_idx] = count
                .parse()
                .map_err(|_| FrequencyFileError::InvalidCount { line: line_idx })?;
        }
        Ok(FrequencyTable { counts })
    }
}
