// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC key arguments.

use anyhow::{Context, Result, bail};
use clap::Args;
use redoubt_bytes::hex;
use zeroize::Zeroizing;

/// Key given as text or as hex. Exactly one is required.
#[derive(Args, Clone)]
#[group(required = true, multiple = false)]
pub struct KeyArgs {
    /// HMAC key as UTF-8 text.
    #[arg(long, value_name = "TEXT")]
    pub key: Option<String>,

    /// HMAC key as hexadecimal (either case).
    #[arg(long, value_name = "HEX")]
    pub key_hex: Option<String>,
}

impl KeyArgs {
    /// Key bytes, wiped on drop.
    pub fn to_bytes(&self) -> Result<Zeroizing<Vec<u8>>> {
        let key = match (&self.key, &self.key_hex) {
            (Some(text), None) => Zeroizing::new(text.as_bytes().to_vec()),
            (None, Some(encoded)) => hex::decode(encoded)
                .map(Zeroizing::new)
                .context("invalid --key-hex")?,
            _ => bail!("exactly one of --key or --key-hex is required"),
        };

        tracing::debug!(key_len = key.len(), "parsed HMAC key");
        Ok(key)
    }
}

impl core::fmt::Debug for KeyArgs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyArgs")
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("key_hex", &self.key_hex.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
