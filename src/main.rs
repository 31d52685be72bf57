// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;

/// Accept any arguments, do nothing, exit successfully.
//
// Help and version flags are disabled; every token, `--help` and
// `--version` included, lands in the trailing positional.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"))]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct App {
    /// accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    args: Vec<OsString>,
}

fn main() -> Result<()> {
    let _args = App::parse();
    Ok(())
}
