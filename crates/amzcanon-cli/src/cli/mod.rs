//! CLI for the amzcanon URL canonicalizer.

mod commands;

use amzcanon_core::config::{self, AmzcanonConfig};
use amzcanon_core::Canonicalizer;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::{Path, PathBuf};

use commands::{run_canonicalize, run_check, run_completions, run_extract};

/// Top-level CLI for amzcanon.
#[derive(Debug, Parser)]
#[command(name = "amzcanon")]
#[command(about = "Rewrite Amazon product URLs to https://<domain>/dp/<ASIN>/", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/amzcanon/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the location each URL ends up on (reads stdin lines when no URL is given).
    Canonicalize {
        /// Product page URLs.
        urls: Vec<String>,
        /// Print only rewritten URLs.
        #[arg(long)]
        only_changed: bool,
    },

    /// Print the ASIN found in a URL and which pattern matched it.
    Extract {
        url: String,
    },

    /// Explain what would happen to a URL.
    Check {
        url: String,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Build the canonicalizer from `--config` or the default config file.
fn load_canonicalizer(path: Option<&Path>) -> Result<Canonicalizer> {
    let cfg: AmzcanonConfig = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(Canonicalizer::new(cfg.activation_rules()?))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let config_path = cli.config.as_deref();
        let stdout = io::stdout().lock();

        match cli.command {
            CliCommand::Canonicalize { urls, only_changed } => run_canonicalize(
                &load_canonicalizer(config_path)?,
                &urls,
                only_changed,
                io::stdin().lock(),
                stdout,
            )?,
            CliCommand::Extract { url } => run_extract(&url, stdout)?,
            CliCommand::Check { url } => {
                run_check(&load_canonicalizer(config_path)?, &url, stdout)?
            }
            CliCommand::Completions { shell } => {
                run_completions(shell, &mut Cli::command(), stdout)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
