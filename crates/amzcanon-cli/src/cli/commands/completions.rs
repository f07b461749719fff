//! `amzcanon completions` – shell completion scripts.

use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

pub fn run_completions<W: Write>(shell: Shell, cmd: &mut Command, mut out: W) -> Result<()> {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut out);
    Ok(())
}
