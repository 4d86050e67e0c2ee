// High-level entry points tying the codec's pieces together.
//
// Thin orchestration over `encoder`/`decoder`: resolve options, call the
// module that does the real work, surface the result.

use crate::decoder;
use crate::encoder::{self, EncodeOptions, EncodeStats};
use crate::error::{DecodeError, EncodeError};

/// Decode `patch` against `sources`, returning the reconstructed target.
///
/// `has_header` selects whether `patch` begins with the LZP header
/// described in spec.md §6.1.
pub fn decode(patch: &[u8], sources: &[&[u8]], has_header: bool) -> Result<Vec<u8>, DecodeError> {
    decoder::decode(patch, sources, has_header)
}

/// Decode `patch` against `sources`, streaming the reconstructed target to
/// `output` instead of allocating and returning a `Vec`.
pub fn decode_to<W: std::io::Write>(
    patch: &[u8],
    sources: &[&[u8]],
    has_header: bool,
    output: &mut W,
) -> Result<(), DecodeError> {
    decoder::decode_to(patch, sources, has_header, output)
}

/// Encode `target` against `sources` under the default options (header
/// emitted, search match floor 2).
pub fn encode(target: &[u8], sources: &[&[u8]], has_header: bool) -> Result<Vec<u8>, EncodeError> {
    let opts = EncodeOptions {
        header: has_header,
        ..EncodeOptions::default()
    };
    encode_with_options(target, sources, &opts).map(|(patch, _)| patch)
}

/// Encode `target` against `sources` with explicit options, returning both
/// the patch bytes and summary statistics about the commands emitted.
pub fn encode_with_options(
    target: &[u8],
    sources: &[&[u8]],
    opts: &EncodeOptions,
) -> Result<(Vec<u8>, EncodeStats), EncodeError> {
    encoder::encode_with_options(target, sources, opts)
}
