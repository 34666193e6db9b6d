// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hexadecimal rendering and parsing.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::HexError;

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders `bytes` as lowercase hex pairs.
///
/// # Example
///
/// ```
/// use redoubt_bytes::hex;
///
/// assert_eq!(hex::encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(LOWER_DIGITS[(byte >> 4) as usize] as char);
        out.push(LOWER_DIGITS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Writes `bytes` as lowercase hex pairs into a formatter.
pub fn write_lower(f: &mut core::fmt::Formatter<'_>, bytes: &[u8]) -> core::fmt::Result {
    for byte in bytes {
        write!(f, "{byte:02x}")?;
    }
    Ok(())
}

/// Parses a hex string (either case) into bytes.
///
/// # Example
///
/// ```
/// use redoubt_bytes::{hex, HexError};
///
/// assert_eq!(hex::decode("DEADbeef"), Ok(vec![0xde, 0xad, 0xbe, 0xef]));
/// assert_eq!(hex::decode("abc"), Err(HexError::OddLength(3)));
/// ```
pub fn decode(input: &str) -> Result<Vec<u8>, HexError> {
    let raw = input.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(HexError::OddLength(raw.len()));
    }

    raw.chunks_exact(2)
        .enumerate()
        .map(|(pair, chunk)| {
            let hi = nibble(chunk[0], pair * 2)?;
            let lo = nibble(chunk[1], pair * 2 + 1)?;
            Ok((hi << 4) | lo)
        })
        .collect()
}

fn nibble(c: u8, position: usize) -> Result<u8, HexError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(HexError::InvalidCharacter {
            character: c as char,
            position,
        }),
    }
}
