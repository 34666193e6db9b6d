// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message sources: files or stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use zeroize::Zeroizing;

/// Argument value that selects stdin.
pub const STDIN_ARG: &str = "-";

/// Where a message is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input, read to EOF.
    Stdin,
    /// A file read in full.
    File(PathBuf),
}

impl Input {
    /// `None` and `-` select stdin; anything else is a file path.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new(STDIN_ARG) => Input::File(path.to_path_buf()),
            _ => Input::Stdin,
        }
    }

    /// Name printed next to a digest.
    pub fn display_name(&self) -> String {
        match self {
            Input::Stdin => STDIN_ARG.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole message. The buffer is wiped on drop.
    pub fn read(&self) -> Result<Zeroizing<Vec<u8>>> {
        let message = match self {
            Input::Stdin => read_all(std::io::stdin().lock()).context("failed to read stdin")?,
            Input::File(path) => std::fs::read(path)
                .map(Zeroizing::new)
                .with_context(|| format!("failed to read {}", path.display()))?,
        };

        tracing::debug!(input = %self.display_name(), bytes = message.len(), "read message");
        Ok(message)
    }
}

/// Read `reader` to EOF into a zeroizing buffer.
pub fn read_all<R: Read>(mut reader: R) -> std::io::Result<Zeroizing<Vec<u8>>> {
    let mut buf = Zeroizing::new(Vec::new());
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_and_none_select_stdin() {
        assert_eq!(Input::from_arg(None), Input::Stdin);
        assert_eq!(Input::from_arg(Some(Path::new("-"))), Input::Stdin);
    }

    #[test]
    fn other_args_are_files() {
        let input = Input::from_arg(Some(Path::new("data.bin")));
        assert_eq!(input, Input::File(PathBuf::from("data.bin")));
        assert_eq!(input.display_name(), "data.bin");
    }

    #[test]
    fn read_all_collects_reader() {
        let buf = read_all(&b"abc"[..]).expect("Failed to read_all(..)");
        assert_eq!(buf.as_slice(), b"abc");
    }

    #[test]
    fn missing_file_reports_path() {
        let input = Input::File(PathBuf::from("/nonexistent/redoubt-input"));
        let err = input.read().expect_err("Expected missing file to fail");
        assert!(format!("{err:#}").contains("/nonexistent/redoubt-input"));
    }
}
