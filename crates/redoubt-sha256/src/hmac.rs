// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 implementation per RFC 2104

use redoubt_bytes::{ByteBuffer, constant_time_eq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, HASH_LEN, IPAD, OPAD};
use crate::digest::Digest;
use crate::fault::InternalFault;
use crate::sha256::Sha256State;

/// HMAC-SHA256 state with all intermediate buffers.
///
/// All key-derived material lives in this struct and is wiped at the end of
/// every [`mac`](Self::mac) call and on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HmacSha256State {
    /// K normalized to exactly BLOCK_LEN bytes
    key_block: ByteBuffer,
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: [u8; BLOCK_LEN],
    /// K ⊕ opad (0x5c repeated)
    k_opad: [u8; BLOCK_LEN],
    /// Inner hash result: SHA256(K ⊕ ipad || message)
    inner_hash: [u8; HASH_LEN],
    /// SHA256 engine shared by key hashing, inner and outer hash
    sha: Sha256State,
}

impl HmacSha256State {
    /// Create new HMAC-SHA256 state
    pub fn new() -> Self {
        Self {
            key_block: ByteBuffer::with_capacity(BLOCK_LEN),
            k_ipad: [0u8; BLOCK_LEN],
            k_opad: [0u8; BLOCK_LEN],
            inner_hash: [0u8; HASH_LEN],
            sha: Sha256State::new(),
        }
    }

    /// Normalize `key` into `self.key_block`: hash if longer than a block,
    /// then zero-pad to exactly one block.
    pub(crate) fn normalize_key(&mut self, key: &[u8]) -> Result<(), InternalFault> {
        self.key_block.clear();

        if key.len() > BLOCK_LEN {
            let hashed = self.sha.hash(key)?;
            self.key_block.extend_from_slice(hashed.as_bytes());
        } else {
            self.key_block.extend_from_slice(key);
        }

        self.key_block.resize_zeroed(BLOCK_LEN);

        if self.key_block.len() != BLOCK_LEN {
            return Err(InternalFault::KeyLength {
                len: self.key_block.len(),
            });
        }

        Ok(())
    }

    /// Derive K ⊕ ipad and K ⊕ opad from the normalized key
    fn apply_masks(&mut self) {
        let key = self.key_block.as_slice();
        for ((inner, outer), &kb) in self.k_ipad.iter_mut().zip(self.k_opad.iter_mut()).zip(key) {
            *inner = kb ^ IPAD;
            *outer = kb ^ OPAD;
        }
    }

    fn compute(&mut self, key: &[u8], message: &[u8]) -> Result<Digest, InternalFault> {
        self.normalize_key(key)?;
        self.apply_masks();

        // Inner hash: SHA256(k_ipad || message)
        let inner = self.sha.hash_segments(&[&self.k_ipad[..], message])?;
        if inner.len() != HASH_LEN {
            return Err(InternalFault::InnerDigestLength { len: inner.len() });
        }
        self.inner_hash.copy_from_slice(inner.as_bytes());

        // Outer hash: SHA256(k_opad || inner_hash)
        self.sha.hash_segments(&[&self.k_opad[..], &self.inner_hash[..]])
    }

    /// HMAC-SHA256 per RFC 2104
    ///
    /// # Errors
    /// Only on a broken internal invariant; see [`InternalFault`].
    pub fn mac(&mut self, key: &[u8], message: &[u8]) -> Result<Digest, InternalFault> {
        // Prevent stale-bytes window from a previous call
        self.zeroize();

        let result = self.compute(key, message);

        self.zeroize();
        result
    }

    #[cfg(test)]
    pub(crate) fn key_block(&self) -> &[u8] {
        self.key_block.as_slice()
    }

    #[cfg(test)]
    pub(crate) fn is_wiped(&self) -> bool {
        self.key_block.is_empty()
            && self.k_ipad == [0u8; BLOCK_LEN]
            && self.k_opad == [0u8; BLOCK_LEN]
            && self.inner_hash == [0u8; HASH_LEN]
            && self.sha.is_wiped()
    }
}

impl Default for HmacSha256State {
    fn default() -> Self {
        Self::new()
    }
}

/// HMAC-SHA256 of `message` under `key`.
///
/// Keys of any length are accepted, including empty ones.
///
/// # Example
///
/// ```
/// use redoubt_sha256::hmac_sha256;
///
/// let tag = hmac_sha256(b"key", b"The quick brown fox jumps over the lazy dog");
/// assert_eq!(
///     tag.to_hex(),
///     "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
/// );
/// ```
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Digest {
    try_hmac_sha256(key, message).unwrap_or_else(|fault| fault.abort())
}

/// HMAC-SHA256, surfacing internal faults instead of panicking.
///
/// # Errors
/// Only on a broken internal invariant; see [`InternalFault`].
pub fn try_hmac_sha256(key: &[u8], message: &[u8]) -> Result<Digest, InternalFault> {
    let mut state = HmacSha256State::new();
    state.mac(key, message)
}

/// Constant-time check of `tag` against HMAC-SHA256(key, message).
///
/// Tags of any length other than 32 bytes are rejected; truncated tags are
/// not accepted.
pub fn verify_hmac_sha256(key: &[u8], message: &[u8], tag: &[u8]) -> bool {
    let expected = hmac_sha256(key, message);
    constant_time_eq(expected.as_bytes(), tag)
}
