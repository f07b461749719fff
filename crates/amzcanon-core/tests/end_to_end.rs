//! End-to-end: parse a location, run the driver, observe the navigation.

use amzcanon_core::activation::ActivationRules;
use amzcanon_core::{Canonicalizer, Decision, PageLocation, RecordingNavigator};

fn run(url: &str) -> (Decision, Vec<String>) {
    let canonicalizer = Canonicalizer::default();
    let location = PageLocation::parse(url).expect("parse location");
    let mut nav = RecordingNavigator::new();
    let decision = canonicalizer.run(&location, &mut nav).expect("run");
    (decision, nav.targets().to_vec())
}

#[test]
fn titled_dp_url_is_rewritten() {
    let (decision, targets) =
        run("https://www.amazon.co.jp/Some-Title/dp/B000123456/ref=sr_1_1?keywords=x");
    assert_eq!(decision.label(), "redirect");
    assert_eq!(targets, ["https://www.amazon.co.jp/dp/B000123456/"]);
}

#[test]
fn gp_product_is_left_as_is() {
    let (decision, targets) = run("https://www.amazon.com/gp/product/B000123456");
    assert_eq!(decision, Decision::Ignored);
    assert!(targets.is_empty());
}

#[test]
fn canonical_url_is_left_as_is() {
    for url in [
        "https://www.amazon.com/dp/B000123456/",
        "https://www.amazon.com/dp/B000123456",
    ] {
        let (decision, targets) = run(url);
        assert_eq!(decision, Decision::AlreadyCanonical, "{url}");
        assert!(targets.is_empty(), "{url}");
    }
}

#[test]
fn dp_with_trailing_ref_is_rewritten() {
    let (_, targets) = run("https://www.amazon.com/dp/B000123456/ref=abc");
    assert_eq!(targets, ["https://www.amazon.com/dp/B000123456/"]);
}

#[test]
fn legacy_asin_url_is_rewritten() {
    let (_, targets) = run("https://www.amazon.co.jp/exec/obidos/ASIN/4000000000/ref=x");
    assert_eq!(targets, ["https://www.amazon.co.jp/dp/4000000000/"]);
}

#[test]
fn matched_url_without_identifier_does_nothing() {
    let (decision, targets) = run("https://www.amazon.com/Some-Title/dp/?ref=x");
    assert_eq!(decision, Decision::NoIdentifier);
    assert!(targets.is_empty());
}

#[test]
fn url_outside_allow_list_does_nothing() {
    let (decision, targets) = run("https://www.amazon.de/Some-Title/dp/B000123456/ref=x");
    assert_eq!(decision, Decision::OutOfScope);
    assert!(targets.is_empty());
}

#[test]
fn second_pass_on_target_is_noop() {
    let (_, targets) = run("https://www.amazon.com/Title/dp/B000123456/ref=x?th=1");
    let (decision, again) = run(&targets[0]);
    assert_eq!(decision, Decision::AlreadyCanonical);
    assert!(again.is_empty());
}

#[test]
fn custom_domains_extend_scope() {
    let rules = ActivationRules::for_domains(["amazon.de"]).unwrap();
    let canonicalizer = Canonicalizer::new(rules);
    let location = PageLocation::parse("https://www.amazon.de/Titel/dp/B000123456/ref=x").unwrap();
    let mut nav = RecordingNavigator::new();
    canonicalizer.run(&location, &mut nav).unwrap();
    assert_eq!(nav.last(), Some("https://www.amazon.de/dp/B000123456/"));
}
