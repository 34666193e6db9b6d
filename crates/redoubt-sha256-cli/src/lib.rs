// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Subcommands of the `redoubt-sha256` binary.
//!
//! ```bash
//! redoubt-sha256 hash Cargo.toml README.md
//! echo -n "The quick brown fox jumps over the lazy dog" | redoubt-sha256 hmac --key key
//! redoubt-sha256 verify --key-hex 0b0b0b0b --tag <HEX> message.bin
//! ```
//!
//! Every `run_*` writes its result to the given writer and returns the
//! process exit code. Diagnostics go through `tracing`, never stdout.

#![warn(missing_docs)]

pub mod hash;
pub mod hmac;
pub mod input;
pub mod key;
pub mod verify;

/// Exit code for a tag that did not verify.
pub const EXIT_MISMATCH: u8 = 2;
