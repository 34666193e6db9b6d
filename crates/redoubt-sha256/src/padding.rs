// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per FIPS 180-3 Section 5.1.1
//!
//! `M || 0x80 || 0x00... || bitlen(M) as u64 BE`, with the zero run chosen so
//! the total length is a multiple of 64 bytes.

use redoubt_bytes::ByteBuffer;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN, PAD_MARKER};
use crate::fault::InternalFault;

/// Number of zero bytes between the 0x80 marker and the length field.
///
/// Computed modulo the block size, so a message whose marker lands exactly on
/// `BLOCK_LEN - LENGTH_FIELD_LEN` gets zero bytes rather than a negative count.
#[inline]
pub(crate) const fn zero_pad_len(message_len: usize) -> usize {
    let used = (message_len % BLOCK_LEN + 1) % BLOCK_LEN;
    (2 * BLOCK_LEN - LENGTH_FIELD_LEN - used) % BLOCK_LEN
}

/// Total padded length for a message of `message_len` bytes.
#[inline]
pub(crate) const fn padded_len(message_len: usize) -> usize {
    message_len + 1 + zero_pad_len(message_len) + LENGTH_FIELD_LEN
}

/// Writes the padded concatenation of `segments` into `out`.
///
/// `out` is cleared first. The bit length covers all segments together.
pub(crate) fn pad_segments_into(
    out: &mut ByteBuffer,
    segments: &[&[u8]],
) -> Result<(), InternalFault> {
    let message_len: usize = segments.iter().map(|segment| segment.len()).sum();
    let bit_len = (message_len as u64).wrapping_mul(8);

    out.clear();
    for segment in segments {
        out.extend_from_slice(segment);
    }

    out.push(PAD_MARKER);
    for _ in 0..zero_pad_len(message_len) {
        out.push(0x00);
    }
    out.push_u64_be(bit_len);

    if out.len() % BLOCK_LEN != 0 {
        return Err(InternalFault::MisalignedPadding { len: out.len() });
    }

    Ok(())
}

/// Pads `message` into a fresh buffer whose length is a multiple of 64.
///
/// # Example
///
/// ```
/// use redoubt_sha256::pad;
///
/// let padded = pad(b"abc");
/// assert_eq!(padded.len(), 64);
/// assert_eq!(padded.get(3), Ok(0x80));
/// assert_eq!(padded.get(63), Ok(24));
/// ```
pub fn pad(message: &[u8]) -> ByteBuffer {
    let mut out = ByteBuffer::with_capacity(padded_len(message.len()));
    if let Err(fault) = pad_segments_into(&mut out, &[message]) {
        fault.abort();
    }
    out
}
