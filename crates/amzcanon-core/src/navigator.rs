//! The one side effect: replacing the current location.
//!
//! The driver only depends on this trait, so tests and the CLI decide what
//! "navigating" actually means.

use anyhow::{Context, Result};
use std::io::Write;

/// Replaces the current location without adding a history entry.
pub trait Navigator {
    fn replace(&mut self, target: &str) -> Result<()>;
}

/// Keeps every replacement target in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    targets: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn last(&self) -> Option<&str> {
        self.targets.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&mut self, target: &str) -> Result<()> {
        self.targets.push(target.to_string());
        Ok(())
    }
}

/// Writes each target as one line.
pub struct WriterNavigator<W: Write> {
    out: W,
}

impl<W: Write> WriterNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Navigator for WriterNavigator<W> {
    fn replace(&mut self, target: &str) -> Result<()> {
        writeln!(self.out, "{target}").with_context(|| format!("write target {target}"))?;
        Ok(())
    }
}
