// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `redoubt-sha256` entry point.
//!
//! Digests and tags go to stdout. Logs go to stderr, filtered by `-v` or
//! `RUST_LOG`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use redoubt_sha256_cli::hash::{HashArgs, run_hash};
use redoubt_sha256_cli::hmac::{HmacArgs, run_hmac};
use redoubt_sha256_cli::verify::{VerifyArgs, run_verify};

/// SHA-256 and HMAC-SHA256 with zeroized scratch state.
#[derive(Parser, Debug)]
#[command(name = "redoubt-sha256", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the SHA-256 digest of each file (or stdin).
    Hash(HashArgs),

    /// Print the HMAC-SHA256 tag of a file (or stdin).
    Hmac(HmacArgs),

    /// Check an HMAC-SHA256 tag in constant time. Exits 2 on mismatch.
    Verify(VerifyArgs),
}

fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "redoubt-sha256 starting");

    let mut stdout = std::io::stdout().lock();
    let result = match &cli.command {
        Commands::Hash(args) => run_hash(args, &mut stdout),
        Commands::Hmac(args) => run_hmac(args, &mut stdout),
        Commands::Verify(args) => run_verify(args, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
