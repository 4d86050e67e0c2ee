// The LZP patch header (spec.md §6.1).
//
// `"LZP"` magic, one byte giving the source count, then one big-endian
// 32-bit Adler-32 checksum per source, in order. Grounded on
// `original_source/lzp/decode.py::process`'s header parsing and
// `original_source/lzp/encoding.py::_write_header`, but with both sides
// fixed to big-endian: the original encoder wrote the checksum bytes
// little-endian while its own decoder read them big-endian, silently
// producing `WrongSourceCount`/garbage-checksum failures whenever a
// patch was round-tripped through the original tools. spec.md resolves
// this by pinning both directions to big-endian, which this module
// follows.

use crate::checksum;
use crate::error::{DecodeError, EncodeError};

const MAGIC: [u8; 3] = [0x4C, 0x5A, 0x50]; // "LZP"

/// A parsed patch header: the checksums of the sources the patch was built
/// against, in the order they must be supplied to the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub checksums: Vec<u32>,
}

impl Header {
    /// Build a header from the sources an encode run was given.
    pub fn for_sources(sources: &[&[u8]]) -> Self {
        Self {
            checksums: sources.iter().map(|s| checksum::compute(s)).collect(),
        }
    }

    /// Parse a header from the front of `data`, advancing `pos` past it.
    pub fn read(data: &[u8], pos: &mut usize) -> Result<Self, DecodeError> {
        let magic = data
            .get(*pos..*pos + MAGIC.len())
            .ok_or(DecodeError::TruncatedPatch)?;
        if magic != MAGIC {
            return Err(DecodeError::BadSignature);
        }
        *pos += MAGIC.len();

        let count = *data.get(*pos).ok_or(DecodeError::TruncatedPatch)? as usize;
        *pos += 1;

        let mut checksums = Vec::with_capacity(count);
        for _ in 0..count {
            let bytes: [u8; 4] = data
                .get(*pos..*pos + 4)
                .ok_or(DecodeError::TruncatedPatch)?
                .try_into()
                .expect("slice of length 4");
            checksums.push(u32::from_be_bytes(bytes));
            *pos += 4;
        }

        Ok(Self { checksums })
    }

    /// Serialize the header, appending it to `out`.
    pub fn write(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        if self.checksums.len() > u8::MAX as usize {
            return Err(EncodeError::TooManySources {
                count: self.checksums.len(),
            });
        }
        out.extend_from_slice(&MAGIC);
        out.push(self.checksums.len() as u8);
        for checksum in &self.checksums {
            out.extend_from_slice(&checksum.to_be_bytes());
        }
        Ok(())
    }
}
