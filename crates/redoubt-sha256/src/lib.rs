// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 and HMAC-SHA256 with secure memory handling
//!
//! Scalar implementation per FIPS 180-3 (SHA-256) and RFC 2104 / RFC 6234
//! (HMAC). Bit-exact at every optimization level. All intermediate values
//! (hash state, message schedule, working variables, padded message, HMAC
//! key blocks) are zeroized after each call.
//!
//! One-shot entry points allocate fresh scratch per call. [`Sha256State`] and
//! [`HmacSha256State`] are reusable engines that reset at the start of every
//! call.
//!
//! References:
//! - FIPS 180-3: Secure Hash Standard (SHS)
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//!
//! ```
//! use redoubt_sha256::{hmac_sha256, sha256, verify_hmac_sha256};
//!
//! let digest = sha256(b"");
//! assert_eq!(
//!     digest.to_hex(),
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//! );
//!
//! let tag = hmac_sha256(b"key", b"message");
//! assert!(verify_hmac_sha256(b"key", b"message", tag.as_bytes()));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod digest;
mod fault;
mod hmac;
mod padding;
mod sha256;
mod word;

pub use consts::{BLOCK_LEN, HASH_LEN, IPAD, LENGTH_FIELD_LEN, OPAD};
pub use digest::Digest;
pub use fault::InternalFault;
pub use hmac::{HmacSha256State, hmac_sha256, try_hmac_sha256, verify_hmac_sha256};
pub use padding::pad;
pub use redoubt_bytes::ByteBuffer;
pub use sha256::{Sha256State, compress_block, sha256, try_sha256};
