//! `amzcanon canonicalize` – print where each URL ends up.

use amzcanon_core::{Canonicalizer, PageLocation, WriterNavigator};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Canonicalize `urls`, or every non-empty line of `input` when `urls` is empty.
///
/// Redirect targets go through a [`WriterNavigator`]; other URLs are echoed
/// unchanged unless `only_changed` is set. In stdin mode a line that is not a
/// URL is logged and echoed so the batch keeps going.
pub fn run_canonicalize<R: BufRead, W: Write>(
    canonicalizer: &Canonicalizer,
    urls: &[String],
    only_changed: bool,
    input: R,
    mut out: W,
) -> Result<()> {
    if !urls.is_empty() {
        for url in urls {
            let location = PageLocation::parse(url)?;
            emit(canonicalizer, &location, url.trim(), only_changed, &mut out)?;
        }
        return Ok(());
    }

    for line in input.lines() {
        let line = line.context("read stdin")?;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        match PageLocation::parse(raw) {
            Ok(location) => emit(canonicalizer, &location, raw, only_changed, &mut out)?,
            Err(err) => {
                tracing::warn!("skipping line {:?}: {}", raw, err);
                if !only_changed {
                    writeln!(out, "{raw}")?;
                }
            }
        }
    }
    Ok(())
}

fn emit<W: Write>(
    canonicalizer: &Canonicalizer,
    location: &PageLocation,
    raw: &str,
    only_changed: bool,
    out: &mut W,
) -> Result<()> {
    let mut nav = WriterNavigator::new(&mut *out);
    let decision = canonicalizer.run(location, &mut nav)?;
    if decision.target().is_none() && !only_changed {
        writeln!(out, "{raw}")?;
    }
    Ok(())
}
