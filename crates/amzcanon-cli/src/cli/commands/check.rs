//! `amzcanon check` – explain the decision for one URL.

use amzcanon_core::{Canonicalizer, PageLocation};
use anyhow::Result;
use std::io::Write;

pub fn run_check<W: Write>(canonicalizer: &Canonicalizer, url: &str, mut out: W) -> Result<()> {
    let location = PageLocation::parse(url)?;
    let decision = canonicalizer.decide(&location);
    writeln!(out, "{decision}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(url: &str) -> String {
        let mut out = Vec::new();
        run_check(&Canonicalizer::default(), url, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reports_each_decision() {
        assert_eq!(check("https://www.amazon.com/gp/product/B0"), "ignored\n");
        assert_eq!(check("https://www.amazon.com/dp/B0/"), "canonical\n");
        assert_eq!(check("https://www.amazon.com/t/dp/?x=1"), "no-identifier\n");
        assert_eq!(check("https://example.com/dp/B0/x"), "out-of-scope\n");
        assert_eq!(
            check("https://www.amazon.com/t/dp/B0/x"),
            "redirect https://www.amazon.com/dp/B0/\n"
        );
    }
}
