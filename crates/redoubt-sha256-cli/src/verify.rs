// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `redoubt-sha256 verify`: constant-time tag check.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use redoubt_bytes::hex;
use redoubt_sha256::{HASH_LEN, verify_hmac_sha256};

use crate::EXIT_MISMATCH;
use crate::input::Input;
use crate::key::KeyArgs;

/// Arguments of the `verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub key: KeyArgs,

    /// Expected tag as hexadecimal.
    #[arg(long, value_name = "HEX")]
    pub tag: String,

    /// Message file. Omitted, or `-`, reads stdin.
    pub file: Option<PathBuf>,
}

/// Print `OK` and return 0 on a match, `FAILED` and [`EXIT_MISMATCH`] otherwise.
pub fn run_verify(args: &VerifyArgs, out: &mut dyn Write) -> Result<u8> {
    let key = args.key.to_bytes()?;
    let tag = hex::decode(&args.tag).context("invalid --tag")?;
    if tag.len() != HASH_LEN {
        tracing::warn!(len = tag.len(), expected = HASH_LEN, "tag has the wrong length");
    }

    let input = Input::from_arg(args.file.as_deref());
    let message = input.read()?;

    if verify_hmac_sha256(&key, &message, &tag) {
        tracing::info!(input = %input.display_name(), "tag verified");
        writeln!(out, "OK")?;
        Ok(0)
    } else {
        tracing::warn!(input = %input.display_name(), "tag mismatch");
        writeln!(out, "FAILED")?;
        Ok(EXIT_MISMATCH)
    }
}
