// The unified source+target byte window (spec.md §3, §4.1).
//
// A single growable buffer split into an immutable source region followed
// by an append-only target region, with a read cursor that wraps modulo
// the source size. This is the data model shared by the encoder and
// decoder — grounded on `original_source/lzp/decode.py::RAMPatchStream`
// (decoder side) and `original_source/lzp/encoding.py::RAMPatchBuffer`
// (encoder side), unified here into one type since both sides need the
// same `append`/`copy`/`move` primitives.

use crate::error::DecodeError;

/// The byte window shared by the encoder and decoder.
///
/// Invariants (spec.md §3):
/// - `0 <= cursor < target_start` whenever `target_start > 0`
/// - `target_start <= target_end <= buffer.len()`
/// - `buffer[..target_start]` never changes after construction
/// - `buffer[target_start..target_end]` is append-only
pub struct Window {
    buffer: Vec<u8>,
    /// Start of the target region; fixed at construction (= total source length).
    target_start: usize,
    /// End of the written target region; non-decreasing.
    target_end: usize,
    /// Read cursor, always in `[0, target_start)` between commands.
    cursor: usize,
}

impl Window {
    /// Construct a window from concatenated sources with an empty target.
    /// Used by the decoder, which grows the target as it processes commands.
    pub fn new(sources: &[&[u8]]) -> Self {
        let mut buffer = Vec::with_capacity(sources.iter().map(|s| s.len()).sum());
        for source in sources {
            buffer.extend_from_slice(source);
        }
        let target_start = buffer.len();
        Self {
            buffer,
            target_start,
            target_end: target_start,
            cursor: 0,
        }
    }

    /// Construct a window from concatenated sources with the target already
    /// known and appended. Used by the encoder: `target_start` marks where
    /// the encoder's write position begins, but the target bytes are all
    /// present from the start so the search can look ahead.
    pub fn with_target(sources: &[&[u8]], target: &[u8]) -> Self {
        let mut window = Self::new(sources);
        window.buffer.extend_from_slice(target);
        window.target_end = window.buffer.len();
        window
    }

    /// Total source region length.
    pub fn source_size(&self) -> usize {
        self.target_start
    }

    /// Start index of the target region (== source_size).
    pub fn target_start(&self) -> usize {
        self.target_start
    }

    /// Current end of the written target region.
    pub fn target_end(&self) -> usize {
        self.target_end
    }

    /// Current read cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Set the read cursor directly (encoder use: after a search step).
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    /// The full buffer (source followed by target-so-far).
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// The target region written so far: `buffer[target_start..target_end]`.
    pub fn target(&self) -> &[u8] {
        &self.buffer[self.target_start..self.target_end]
    }

    /// Append literal bytes to the target. Does not move the cursor.
    pub fn append(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
        self.target_end += bytes.len();
    }

    /// Copy `n` bytes starting at the read cursor into the target,
    /// advancing the cursor by `n`. Does not wrap: if the cursor reaches
    /// `target_start` mid-copy, it continues reading from the bytes just
    /// appended (this is what makes the codec work as a run-length-style
    /// self-referential compressor — see spec.md §4.1 and §9).
    pub fn copy(&mut self, n: usize) -> Result<(), DecodeError> {
        for _ in 0..n {
            let byte = *self
                .buffer
                .get(self.cursor)
                .ok_or(DecodeError::TruncatedPatch)?;
            self.buffer.push(byte);
            self.target_end += 1;
            self.cursor += 1;
        }
        Ok(())
    }

    /// Relocate the read cursor by `delta`, wrapping modulo `target_start`
    /// (Euclidean remainder, result always in `[0, target_start)`).
    /// Undefined — and rejected — when `target_start == 0`.
    pub fn move_cursor(&mut self, delta: i64) -> Result<(), DecodeError> {
        if self.target_start == 0 {
            return Err(DecodeError::InvalidMove);
        }
        let size = self.target_start as i64;
        let new_pos = (self.cursor as i64 + delta).rem_euclid(size);
        self.cursor = new_pos as usize;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_sets_cursor_and_bounds() {
        let w = Window::new(&[b"abc", b"de"]);
        assert_eq!(w.source_size(), 5);
        assert_eq!(w.target_start(), 5);
        assert_eq!(w.target_end(), 5);
        assert_eq!(w.cursor(), 0);
        assert_eq!(w.bytes(), b"abcde");
    }

    #[test]
    fn append_grows_target_without_moving_cursor() {
        let mut w = Window::new(&[b"abc"]);
        w.set_cursor(2);
        w.append(b"XY");
        assert_eq!(w.target_end(), 5);
        assert_eq!(w.target(), b"XY");
        assert_eq!(w.cursor(), 2);
    }

    #[test]
    fn copy_does_not_wrap_and_reads_fresh_target_bytes() {
        // Run-length behavior: copy(n) reading past target_start continues
        // into bytes it just appended.
        let mut w = Window::new(&[b"A"]);
        w.append(b"A"); // target = "A", cursor still 0
        w.set_cursor(0);
        w.copy(5).unwrap(); // copy "A" from source, then from freshly-copied bytes
        assert_eq!(w.target(), b"AAAAAA");
        assert_eq!(w.cursor(), 6);
    }

    #[test]
    fn copy_past_buffer_end_is_truncated_patch() {
        let mut w = Window::new(&[b"AB"]);
        w.set_cursor(1);
        assert!(matches!(w.copy(5), Err(DecodeError::TruncatedPatch)));
    }

    #[test]
    fn move_wraps_modulo_source_size_both_directions() {
        let mut w = Window::new(&[b"0123456789"]); // source_size = 10
        w.set_cursor(5);
        w.move_cursor(3).unwrap();
        assert_eq!(w.cursor(), 8);
        w.move_cursor(5).unwrap();
        assert_eq!(w.cursor(), 3); // (8 + 5) % 10
        w.move_cursor(-7).unwrap();
        assert_eq!(w.cursor(), 6); // Euclidean: (3 - 7) % 10 == 6
    }

    #[test]
    fn move_with_zero_source_size_is_invalid() {
        let mut w = Window::new(&[]);
        assert!(matches!(
            w.move_cursor(1),
            Err(DecodeError::InvalidMove)
        ));
    }
}
