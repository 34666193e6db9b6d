// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `redoubt-sha256 hash`: SHA-256 of each input.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use redoubt_sha256::sha256;

use crate::input::Input;

/// Arguments of the `hash` subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Files to hash. No file, or `-`, reads stdin.
    pub files: Vec<PathBuf>,
}

impl HashArgs {
    fn inputs(&self) -> Vec<Input> {
        if self.files.is_empty() {
            return vec![Input::Stdin];
        }
        self.files
            .iter()
            .map(|file| Input::from_arg(Some(file.as_path())))
            .collect()
    }
}

/// Print `<hex>  <name>` for every input, in argument order.
pub fn run_hash(args: &HashArgs, out: &mut dyn Write) -> Result<u8> {
    for input in args.inputs() {
        let message = input.read()?;
        let digest = sha256(&message);

        tracing::info!(input = %input.display_name(), bytes = message.len(), "hashed");
        writeln!(out, "{digest}  {}", input.display_name())?;
    }

    Ok(0)
}
