// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `redoubt-sha256 hmac`: HMAC-SHA256 tag of one input.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use redoubt_sha256::hmac_sha256;

use crate::input::Input;
use crate::key::KeyArgs;

/// Arguments of the `hmac` subcommand.
#[derive(Args, Debug)]
pub struct HmacArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub key: KeyArgs,

    /// Message file. Omitted, or `-`, reads stdin.
    pub file: Option<PathBuf>,
}

/// Print the hex tag of the message under the given key.
pub fn run_hmac(args: &HmacArgs, out: &mut dyn Write) -> Result<u8> {
    let key = args.key.to_bytes()?;
    let input = Input::from_arg(args.file.as_deref());
    let message = input.read()?;

    let tag = hmac_sha256(&key, &message);

    tracing::info!(input = %input.display_name(), bytes = message.len(), "computed tag");
    writeln!(out, "{tag}")?;

    Ok(0)
}
