// The LZP command set (spec.md §4.2 opcode table).
//
// A closed sum type over the four kinds of patch command — End, Literal,
// LiteralRun, MoveCopy — in the style of the teacher's own `Instruction`
// enum (`vcdiff/code_table.rs`): no inheritance, no dynamic dispatch, one
// `read` function that advances a byte cursor and returns the next parsed
// command.

use crate::error::DecodeError;
use crate::varint;

/// A single parsed patch command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Halt. No further bytes are read.
    End,
    /// Copy `len` bytes from the cursor in place (cursor not repositioned).
    CopyInPlace { len: usize },
    /// Append one literal byte.
    Literal { byte: u8 },
    /// Append `bytes.len()` literal bytes read from the patch.
    LiteralRun { bytes: Vec<u8> },
    /// Move the cursor by `delta`, then copy `len` bytes.
    MoveCopy { delta: i64, len: usize },
}

/// Parse the next command starting at `data[pos]`, returning the command
/// and the new position. `pos` is advanced past the full command.
pub fn read(data: &[u8], pos: &mut usize) -> Result<Command, DecodeError> {
    let op = *data.get(*pos).ok_or(DecodeError::TruncatedPatch)?;
    *pos += 1;

    let direction = op & 0x80 != 0;
    let v = op & 0x7F;

    match v {
        0 => {
            if direction {
                let (n, consumed) = varint::read(&data[*pos..])?;
                *pos += consumed;
                Ok(Command::CopyInPlace {
                    len: n as usize + 1,
                })
            } else {
                Ok(Command::End)
            }
        }
        1 => {
            if direction {
                let (n, consumed) = varint::read(&data[*pos..])?;
                *pos += consumed;
                let len = n as usize + 3;
                let end = pos.checked_add(len).ok_or(DecodeError::TruncatedPatch)?;
                let bytes = data.get(*pos..end).ok_or(DecodeError::TruncatedPatch)?;
                *pos = end;
                Ok(Command::LiteralRun {
                    bytes: bytes.to_vec(),
                })
            } else {
                let byte = *data.get(*pos).ok_or(DecodeError::TruncatedPatch)?;
                *pos += 1;
                Ok(Command::Literal { byte })
            }
        }
        size => {
            let (n, consumed) = varint::read(&data[*pos..])?;
            *pos += consumed;
            let magnitude = n as i64 + 1;
            let delta = if direction { -magnitude } else { magnitude };
            Ok(Command::MoveCopy {
                delta,
                len: size as usize,
            })
        }
    }
}
