// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 implementation per FIPS 180-3 Section 6.2

use redoubt_bytes::ByteBuffer;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, H0, K256};
use crate::digest::Digest;
use crate::fault::InternalFault;
use crate::padding::pad_segments_into;
use crate::word::{bsig0, bsig1, ch, maj, ssig0, ssig1};

/// SHA-256 engine with all per-message scratch state.
///
/// Every [`hash`](Self::hash) starts from H(0) with a freshly padded buffer
/// and wipes everything before returning, so nothing carries over between
/// messages. Exclusive `&mut` access serializes callers sharing one engine.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha256State {
    // Hash state H(i)
    h: [u32; 8],

    // Message schedule W[0..63]
    w: [u32; 64],

    // Working variables a..h
    wv: [u32; 8],

    // Block being compressed
    block: [u8; BLOCK_LEN],

    // Padded message, always a multiple of BLOCK_LEN once framed
    padded: ByteBuffer,
}

impl Sha256State {
    /// Create new SHA-256 engine
    pub fn new() -> Self {
        Self {
            h: H0,
            w: [0u32; 64],
            wv: [0u32; 8],
            block: [0u8; BLOCK_LEN],
            padded: ByteBuffer::new(),
        }
    }

    /// Reset to H(0) and wipe all scratch
    fn init(&mut self) {
        self.zeroize();
        self.h = H0;
    }

    /// Compress `self.block` into `self.h`, per FIPS 180-3 Section 6.2.2
    fn compress(&mut self) {
        // Step 1: W[0..15] from block (big-endian)
        for (word, bytes) in self.w.iter_mut().zip(self.block.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        // W[16..63]: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..64 {
            self.w[t] = ssig1(self.w[t - 2])
                .wrapping_add(self.w[t - 7])
                .wrapping_add(ssig0(self.w[t - 15]))
                .wrapping_add(self.w[t - 16]);
        }

        // Step 2: working variables from H(i-1)
        self.wv = self.h;

        // Step 3: 64 rounds
        for (k, wt) in K256.iter().zip(self.w.iter()) {
            let [a, b, c, d, e, f, g, h] = self.wv;

            let t1 = h
                .wrapping_add(bsig1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(*k)
                .wrapping_add(*wt);
            let t2 = bsig0(a).wrapping_add(maj(a, b, c));

            // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
            self.wv = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
        }

        // Step 4: H(i) = H(i-1) + working variables
        for (h, v) in self.h.iter_mut().zip(self.wv.iter()) {
            *h = h.wrapping_add(*v);
        }

        self.w.zeroize();
        self.wv.zeroize();
        self.block.zeroize();
    }

    /// Feed every block of `self.padded` through the compression function, in order
    fn process_padded(&mut self) -> Result<(), InternalFault> {
        let len = self.padded.len();
        if len % BLOCK_LEN != 0 {
            return Err(InternalFault::MisalignedPadding { len });
        }

        for offset in (0..len).step_by(BLOCK_LEN) {
            let block = self
                .padded
                .read_array::<BLOCK_LEN>(offset)
                .map_err(|_| InternalFault::BlockOutOfBounds { offset, len })?;
            self.block.copy_from_slice(block);
            self.compress();
        }

        Ok(())
    }

    /// Hash the concatenation of `segments` as one message
    pub(crate) fn hash_segments(&mut self, segments: &[&[u8]]) -> Result<Digest, InternalFault> {
        self.init();

        let result = pad_segments_into(&mut self.padded, segments)
            .and_then(|()| self.process_padded())
            .map(|()| Digest::from_state(&self.h));

        self.zeroize();
        result
    }

    /// SHA-256 of a complete message
    ///
    /// # Errors
    /// Only on a broken internal invariant; see [`InternalFault`].
    pub fn hash(&mut self, message: &[u8]) -> Result<Digest, InternalFault> {
        self.hash_segments(&[message])
    }

    /// Run block processing over an already-padded buffer, starting from H(0)
    #[cfg(test)]
    pub(crate) fn hash_prepadded(&mut self, padded: &[u8]) -> Result<Digest, InternalFault> {
        self.init();
        self.padded.extend_from_slice(padded);

        let result = self.process_padded().map(|()| Digest::from_state(&self.h));

        self.zeroize();
        result
    }

    #[cfg(test)]
    pub(crate) fn is_wiped(&self) -> bool {
        self.h == [0u32; 8]
            && self.w == [0u32; 64]
            && self.wv == [0u32; 8]
            && self.block == [0u8; BLOCK_LEN]
            && self.padded.is_empty()
    }
}

impl Default for Sha256State {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA-256 compression function (single block)
///
/// Updates hash state `h` with a single 512-bit message block. No padding is
/// applied; `h` is whatever intermediate state the caller chains from.
///
/// # Arguments
/// * `h` - Hash state (8 × u32, input/output)
/// * `block` - Message block (64 bytes)
pub fn compress_block(h: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let mut state = Sha256State::new();
    state.h = *h;
    state.block = *block;

    state.compress();

    *h = state.h;
}

/// SHA-256 of `message`.
///
/// # Example
///
/// ```
/// use redoubt_sha256::sha256;
///
/// assert_eq!(
///     sha256(b"abc").to_hex(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn sha256(message: &[u8]) -> Digest {
    try_sha256(message).unwrap_or_else(|fault| fault.abort())
}

/// SHA-256 of `message`, surfacing internal faults instead of panicking.
///
/// # Errors
/// Only on a broken internal invariant; see [`InternalFault`].
pub fn try_sha256(message: &[u8]) -> Result<Digest, InternalFault> {
    let mut state = Sha256State::new();
    state.hash(message)
}
