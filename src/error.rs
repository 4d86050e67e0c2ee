// Error types for the LZP codec.
//
// One enum per fallible surface, matching the corpus convention of deriving
// `Display`/`std::error::Error` with `thiserror` rather than hand-rolling
// `impl Display`.

use thiserror::Error;

/// Errors that can occur while decoding a patch.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Header magic was not `"LZP"`.
    #[error("bad signature: expected \"LZP\"")]
    BadSignature,

    /// The number of sources supplied does not match the header's source count.
    #[error("wrong source count: header says {expected}, got {actual}")]
    WrongSourceCount { expected: usize, actual: usize },

    /// A supplied source's checksum does not match the header value.
    #[error(
        "checksum mismatch for source {source_index}: expected {}, actual {}",
        display_checksum(*expected), display_checksum(*actual)
    )]
    ChecksumMismatch {
        source_index: usize,
        expected: u32,
        actual: u32,
    },

    /// End of the patch stream reached mid-opcode, mid-varnum, or mid-literal.
    #[error("truncated patch")]
    TruncatedPatch,

    /// A `move` command was encountered with zero total source size.
    #[error("invalid move: source size is zero")]
    InvalidMove,

    /// The output sink failed.
    #[error("output write error: {0}")]
    OutputWrite(#[from] std::io::Error),
}

/// Errors that can occur while encoding a patch.
///
/// Encoding over in-memory buffers cannot fail; this only surfaces sink I/O
/// failures from the streaming entry points.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("output write error: {0}")]
    OutputWrite(#[from] std::io::Error),

    /// The header format reserves one byte for the source count.
    #[error("too many sources: {count} exceeds the header's 255-source limit")]
    TooManySources { count: usize },
}

/// Formats a checksum as spaced hex, matching the original implementation's
/// `display_checksum` (`value.to_bytes(4, 'big').hex(' ', 1)`).
pub(crate) fn display_checksum(value: u32) -> String {
    let bytes = value.to_be_bytes();
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_display_matches_original_format() {
        assert_eq!(display_checksum(0x3A3F7A90), "3A 3F 7A 90");
        assert_eq!(display_checksum(0), "00 00 00 00");
    }
}
