// SPDX-License-Identifier: MIT

//! Shell completion generation for rdm.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Write completions for `shell` to stdout.
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "rdm", &mut std::io::stdout());
}
