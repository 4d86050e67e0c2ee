//! LZP: a byte-level binary delta/patch codec.
//!
//! Given an ordered list of source byte sequences and a target byte
//! sequence, [`encoder::encode`] produces a compact patch; given the same
//! sources and the patch, [`decoder::decode`] reconstructs the target
//! bit-for-bit. With zero sources the codec degenerates to a plain
//! self-referential compressor.
//!
//! The crate provides:
//! - The core codec (`window`, `command`, `header`, `varint`, `checksum`,
//!   `decoder`, `encoder`)
//! - High-level entry points tying them together (`engine`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick start
//!
//! ```
//! use lzp::engine::{decode, encode};
//!
//! let source = b"hello old world";
//! let target = b"hello new world";
//!
//! let patch = encode(target, &[source], true).unwrap();
//! let decoded = decode(&patch, &[source], true).unwrap();
//! assert_eq!(decoded, target);
//! ```

pub mod checksum;
pub mod command;
pub mod decoder;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod header;
pub mod varint;
pub mod window;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{DecodeError, EncodeError};
