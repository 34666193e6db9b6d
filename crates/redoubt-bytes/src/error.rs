// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for redoubt-bytes.
use thiserror::Error;

/// Errors from [`ByteBuffer`](crate::ByteBuffer) accessors.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// Indexed get/set past the end of the buffer.
    #[error("index {index} out of bounds for buffer of length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Buffer length at the time of the access.
        len: usize,
    },

    /// Fixed-size read that would run past the end of the buffer.
    #[error("read of {size} bytes at offset {offset} exceeds buffer of length {len}")]
    ReadPastEnd {
        /// Start offset of the read.
        offset: usize,
        /// Number of bytes requested.
        size: usize,
        /// Buffer length at the time of the read.
        len: usize,
    },
}

/// Errors from [`hex::decode`](crate::hex::decode).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum HexError {
    /// Input has an odd number of characters.
    #[error("hex string has odd length {0}")]
    OddLength(usize),

    /// Input contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex character {character:?} at position {position}")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Byte position in the input.
        position: usize,
    },
}
