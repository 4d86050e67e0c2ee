// The LZP encoder.
//
// Drives a greedy doubling-then-refine longest-match search over a `Window`
// preloaded with the sources and the full, already-known target, emitting
// literal and copy commands that the decoder can invert.

use crate::error::EncodeError;
use crate::header::Header;
use crate::varint;
use crate::window::Window;

/// Tunable knobs for an encode run (spec.md §4.3 ambient configuration).
#[derive(Debug, Clone, Copy)]
pub struct EncodeOptions {
    /// Whether to prefix the patch with the header (magic, source count,
    /// per-source checksums).
    pub header: bool,
    /// Floor on the match length the search will accept. The wire format's
    /// hard minimum is 2 regardless of this value — raising it only prunes
    /// matches the encoder would otherwise take, it cannot produce a command
    /// below the format's floor.
    pub min_match: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            header: true,
            min_match: 2,
        }
    }
}

/// Summary statistics from an encode run, mirroring the teacher's own
/// `EncodeStats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    pub literal_bytes: usize,
    pub copy_commands: usize,
    pub copy_bytes: usize,
}

/// Encode `target` against `sources` under the default options (header
/// emitted, match floor 2).
pub fn encode(target: &[u8], sources: &[&[u8]]) -> Result<Vec<u8>, EncodeError> {
    encode_with_options(target, sources, &EncodeOptions::default()).map(|(bytes, _)| bytes)
}

/// Encode `target` against `sources`, returning both the patch bytes and
/// summary statistics about the commands emitted.
pub fn encode_with_options(
    target: &[u8],
    sources: &[&[u8]],
    options: &EncodeOptions,
) -> Result<(Vec<u8>, EncodeStats), EncodeError> {
    let mut out = Vec::new();
    if options.header {
        Header::for_sources(sources).write(&mut out)?;
    }
    let min_match = options.min_match.max(2);
    let stats = write_body(&mut out, target, sources, min_match);
    Ok((out, stats))
}

fn write_body(out: &mut Vec<u8>, target: &[u8], sources: &[&[u8]], min_match: usize) -> EncodeStats {
    let window = Window::with_target(sources, target);
    let source_size = window.source_size();
    let target_end = window.target_end();
    let buffer = window.bytes();

    let mut r = 0usize;
    let mut w = window.target_start();
    let mut stats = EncodeStats::default();
    let mut literal = Vec::new();

    log::debug!(
        "encoding: {} source byte(s), {} target byte(s)",
        source_size,
        target.len()
    );

    while w < target_end {
        match search(buffer, r, w, target_end, source_size, min_match) {
            Step::Literal(byte) => {
                literal.push(byte);
                w += 1;
            }
            Step::Match {
                len,
                delta,
                new_cursor,
            } => {
                if !literal.is_empty() {
                    stats.literal_bytes += literal.len();
                    encode_literal(out, &literal);
                    literal.clear();
                }
                stats.copy_commands += 1;
                stats.copy_bytes += len;
                encode_copy(out, len, delta);
                r = new_cursor;
                w += len;
            }
        }
    }
    if !literal.is_empty() {
        stats.literal_bytes += literal.len();
        encode_literal(out, &literal);
    }
    out.push(0x00);

    log::debug!(
        "encoded {} copy command(s) ({} byte(s)), {} literal byte(s)",
        stats.copy_commands,
        stats.copy_bytes,
        stats.literal_bytes
    );
    stats
}

enum Step {
    Literal(u8),
    Match {
        len: usize,
        delta: i64,
        new_cursor: usize,
    },
}

/// Find the longest match at write position `w`, or the next literal byte.
fn search(
    buffer: &[u8],
    r: usize,
    w: usize,
    target_end: usize,
    source_size: usize,
    min_match: usize,
) -> Step {
    let remaining = target_end - w;
    let Some(mut best_position) = find(buffer, r, w, remaining, source_size, min_match) else {
        return Step::Literal(buffer[w]);
    };
    let mut size = min_match;

    // Doubling: keep growing the candidate length while a match exists.
    loop {
        let candidate_size = size * 2;
        match find(buffer, r, w, remaining, source_size, candidate_size) {
            Some(p) => {
                size = candidate_size;
                best_position = p;
            }
            None => break,
        }
    }
    // Binary refinement between `size` and the doubling step that failed.
    let mut increment = size / 2;
    while increment > 0 {
        let candidate_size = size + increment;
        if let Some(p) = find(buffer, r, w, remaining, source_size, candidate_size) {
            size = candidate_size;
            best_position = p;
        }
        increment /= 2;
    }

    let delta = signed_distance(source_size, r, best_position);
    Step::Match {
        len: size,
        delta,
        new_cursor: best_position + size,
    }
}

/// Look for `amount` bytes matching `buffer[w..w+amount]`, searching the
/// forward half (`[r, w)`) and the reverse half (`[0, r)`) and returning
/// whichever candidate is closer to `r` by the absolute-distance metric.
fn find(
    buffer: &[u8],
    r: usize,
    w: usize,
    remaining: usize,
    source_size: usize,
    amount: usize,
) -> Option<usize> {
    if amount > remaining {
        return None;
    }
    let needle = &buffer[w..w + amount];
    let forward = find_forward(buffer, needle, r, w + amount - 1);
    let reverse = find_reverse(buffer, needle, 0, r + amount - 1);
    match (forward, reverse) {
        (None, None) => None,
        (Some(f), None) => Some(f),
        (None, Some(rv)) => Some(rv),
        (Some(f), Some(rv)) => {
            if abs_distance(source_size, r, rv) < abs_distance(source_size, r, f) {
                Some(rv)
            } else {
                Some(f)
            }
        }
    }
}

/// Leftmost occurrence of `needle` fully contained in `haystack[start..end]`.
fn find_forward(haystack: &[u8], needle: &[u8], start: usize, end: usize) -> Option<usize> {
    let limit = end.checked_sub(needle.len())?;
    if start > limit {
        return None;
    }
    (start..=limit).find(|&p| &haystack[p..p + needle.len()] == needle)
}

/// Rightmost occurrence of `needle` fully contained in `haystack[start..end]`.
fn find_reverse(haystack: &[u8], needle: &[u8], start: usize, end: usize) -> Option<usize> {
    let limit = end.checked_sub(needle.len())?;
    if start > limit {
        return None;
    }
    (start..=limit).rev().find(|&p| &haystack[p..p + needle.len()] == needle)
}

/// Absolute distance from `p` to `r`, accounting for cursor wrap (spec.md
/// §4.3). Used only to pick between two already-found candidates.
fn abs_distance(source_size: usize, r: usize, p: usize) -> u64 {
    let direct = (p as i64 - r as i64).unsigned_abs();
    let wrap = source_size as u64 - direct;
    direct.min(wrap)
}

/// Signed distance from `r` to `p`, wrapping into `(-source_size, source_size)`.
/// Ties between the direct and wraparound routes favor the direct route.
fn signed_distance(source_size: usize, r: usize, p: usize) -> i64 {
    let direct = p as i64 - r as i64;
    let size = source_size as i64;
    let wraparound = if direct < 0 { direct + size } else { direct - size };
    if wraparound.abs() < direct.abs() {
        wraparound
    } else {
        direct
    }
}

fn encode_literal(out: &mut Vec<u8>, bytes: &[u8]) {
    if bytes.len() < 3 {
        for &byte in bytes {
            out.push(0x01);
            out.push(byte);
        }
    } else {
        out.push(0x81);
        varint::write(out, (bytes.len() - 3) as u64);
        out.extend_from_slice(bytes);
    }
}

fn encode_copy(out: &mut Vec<u8>, size: usize, delta: i64) {
    if delta == 0 {
        out.push(0x80);
        varint::write(out, (size - 1) as u64);
        return;
    }
    if size >= 0x80 {
        encode_copy(out, 0x7f, delta);
        encode_copy(out, size - 0x7f, 0);
        return;
    }
    let op = (if delta < 0 { 0x80 } else { 0 }) | size as u8;
    out.push(op);
    varint::write(out, delta.unsigned_abs() - 1);
}
