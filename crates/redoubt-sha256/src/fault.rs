// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Broken internal invariant.
///
/// Every message and every key is valid input, so none of these are reachable
/// from a caller's data. Seeing one means the framing or HMAC code is wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalFault {
    /// Padded message length is not a multiple of the block size
    #[error("padded length {len} is not a multiple of 64 bytes")]
    MisalignedPadding {
        /// Length of the padded buffer
        len: usize,
    },

    /// Block read would run past the end of the padded message
    #[error("block read at offset {offset} runs past padded length {len}")]
    BlockOutOfBounds {
        /// Offset of the block that could not be read
        offset: usize,
        /// Length of the padded buffer
        len: usize,
    },

    /// Normalized HMAC key is not exactly one block long
    #[error("normalized HMAC key is {len} bytes, expected 64")]
    KeyLength {
        /// Length of the normalized key
        len: usize,
    },

    /// Inner HMAC hash is not exactly one digest long
    #[error("inner HMAC digest is {len} bytes, expected 32")]
    InnerDigestLength {
        /// Length of the inner digest
        len: usize,
    },
}

impl InternalFault {
    /// Stops the current computation. No partial result ever escapes.
    #[cold]
    #[inline(never)]
    pub fn abort(self) -> ! {
        panic!("redoubt-sha256 internal fault: {self}")
    }
}
