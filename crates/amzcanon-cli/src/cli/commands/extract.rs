//! `amzcanon extract` – print the ASIN in a URL.

use amzcanon_core::{match_asin, PageLocation};
use anyhow::{anyhow, Result};
use std::io::Write;

/// Prints `<asin>\t<pattern>`. Finding nothing is an error here, unlike in the driver.
pub fn run_extract<W: Write>(url: &str, mut out: W) -> Result<()> {
    let location = PageLocation::parse(url)?;
    let m = match_asin(location.href()).ok_or_else(|| anyhow!("no ASIN found in {url}"))?;
    writeln!(out, "{}\t{}", m.asin, m.pattern)?;
    Ok(())
}
