// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level collaborators for `redoubt-sha256`.
//!
//! - [`ByteBuffer`]: growable byte sequence with big-endian integer append,
//!   bounds-checked indexed access and zeroization on clear/drop.
//! - [`hex`]: lowercase hex rendering and parsing.
//! - [`constant_time_eq`]: timing-independent slice comparison.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod buffer;
mod error;

pub mod hex;

pub use buffer::ByteBuffer;
pub use error::{BufferError, HexError};

use subtle::ConstantTimeEq;

/// Constant-time equality comparison for byte slices.
///
/// Slices of different length compare unequal immediately; the length of a
/// MAC tag is public information.
///
/// # Example
///
/// ```
/// use redoubt_bytes::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}
