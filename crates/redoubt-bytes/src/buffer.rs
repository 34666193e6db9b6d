// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ByteBuffer - growable byte sequence with zeroization.
//!
//! Integers are always appended big-endian, the byte order SHA-256 uses for
//! both message words and the trailing length field.

use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::BufferError;

/// Growable byte sequence.
///
/// Contents are wiped on [`clear`](Self::clear), on [`copy_from`](Self::copy_from)
/// and on drop.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty buffer able to hold `capacity` bytes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Creates a buffer holding a copy of `bytes`.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut buffer = Self::with_capacity(bytes.len());
        buffer.extend_from_slice(bytes);
        buffer
    }

    /// Number of bytes held.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the contents.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Appends a single byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.grow_for(1);
        self.data.push(byte);
    }

    /// Appends `value` as 4 big-endian bytes.
    pub fn push_u32_be(&mut self, value: u32) {
        self.extend_from_slice(&value.to_be_bytes());
    }

    /// Appends `value` as 8 big-endian bytes.
    pub fn push_u64_be(&mut self, value: u64) {
        self.extend_from_slice(&value.to_be_bytes());
    }

    /// Appends all of `bytes`.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.grow_for(bytes.len());
        self.data.extend_from_slice(bytes);
    }

    /// Grows the buffer to `new_len` bytes, filling with zeros.
    ///
    /// Shrinking is not supported; a smaller `new_len` is a no-op.
    pub fn resize_zeroed(&mut self, new_len: usize) {
        if new_len <= self.data.len() {
            return;
        }

        self.grow_for(new_len - self.data.len());
        self.data.resize(new_len, 0);
    }

    /// Returns the byte at `index`.
    pub fn get(&self, index: usize) -> Result<u8, BufferError> {
        self.data
            .get(index)
            .copied()
            .ok_or(BufferError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    /// Overwrites the byte at `index`.
    pub fn set(&mut self, index: usize, byte: u8) -> Result<(), BufferError> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(BufferError::IndexOutOfBounds { index, len })?;
        *slot = byte;

        Ok(())
    }

    /// Borrows `N` bytes starting at `offset`.
    pub fn read_array<const N: usize>(&self, offset: usize) -> Result<&[u8; N], BufferError> {
        let read_past_end = BufferError::ReadPastEnd {
            offset,
            size: N,
            len: self.data.len(),
        };

        let end = offset.checked_add(N).ok_or(read_past_end)?;
        let bytes = self.data.get(offset..end).ok_or(read_past_end)?;

        bytes.try_into().map_err(|_| read_past_end)
    }

    /// Replaces the contents with a copy of `other`.
    pub fn copy_from(&mut self, other: &ByteBuffer) {
        self.clear();
        self.extend_from_slice(other.as_slice());
    }

    /// Wipes and empties the buffer. Capacity is kept.
    pub fn clear(&mut self) {
        self.data.zeroize();
    }

    /// Reallocates by hand so the old allocation is wiped, never just freed.
    fn grow_for(&mut self, additional: usize) {
        let required = self.data.len().saturating_add(additional);
        if required <= self.data.capacity() {
            return;
        }

        let new_capacity = required.max(self.data.capacity().saturating_mul(2));
        let mut grown = Vec::with_capacity(new_capacity);
        grown.extend_from_slice(&self.data);

        let mut old = core::mem::replace(&mut self.data, grown);
        old.zeroize();
    }
}

impl core::fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.data.len())
            .field("data", &"REDACTED")
            .finish()
    }
}
