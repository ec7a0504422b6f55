#![cfg(test)]
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use spokr_common::address::{DottedQuad, OctetSlots};
use spokr_common::error::ResolveError;
use spokr_core::numeral::{self, Conversion};
use spokr_core::resolver;

fn slots(values: [Option<&str>; 4]) -> OctetSlots {
    let [first, second, third, fourth] = values.map(|value| value.map(str::to_string));
    OctetSlots {
        first,
        second,
        third,
        fourth,
    }
}

/// A dotted utterance that needs no conversion passes straight through
/// the resolver and arrives validated.
#[test]
fn resolve_already_dotted_utterance() {
    let result = resolver::resolve_utterance("192.168.0.1");

    assert!(result.is_ok(), "Resolution failed: {:?}", result.err());
    let quad: DottedQuad = result.unwrap();

    assert_eq!(quad.as_str(), "192.168.0.1");
    assert_eq!(
        IpAddr::V4(quad.to_ipv4()),
        IpAddr::V4(Ipv4Addr::new(192, 168, 0, 1)),
        "Resolved address does not round-trip into std::net"
    );
}

/// The full voice path: digit-by-digit speech with "point" separators.
#[test]
fn resolve_fully_spoken_utterance() {
    let utterance: &str = "one nine two point one six eight point zero point one";
    let quad: DottedQuad = resolver::resolve_utterance(utterance).expect("should resolve");

    assert_eq!(quad.as_str(), "192.168.0.1");
}

#[test]
fn resolve_rejects_out_of_range_octet() {
    let result = resolver::resolve_utterance("300.1.1.1");

    assert_eq!(
        result,
        Err(ResolveError::InvalidOctetValue {
            octet: "300".to_string()
        })
    );
}

#[test]
fn resolve_slots_spoken_per_octet() {
    let quad = resolver::resolve_slots(&slots([
        Some("one nine two"),
        Some("one six eight"),
        Some("zero"),
        Some("one"),
    ]))
    .expect("all four slots spoken");

    assert_eq!(quad.as_str(), "192.168.0.1");
}

#[test]
fn resolve_slots_reports_missing_octets() {
    let result = resolver::resolve_slots(&slots([
        None,
        Some("one"),
        Some("two"),
        Some("three"),
    ]));

    assert_eq!(result, Err(ResolveError::OctetCountMismatch { found: 3 }));
}

/// Conversion is a pure function over its input; re-running a resolution
/// must yield the identical outcome.
#[test]
fn resolution_has_no_hidden_state() {
    let inputs: [&str; 3] = [
        "192.168.0.1",
        "one nine two point one six eight point zero point one",
        "300.1.1.1",
    ];

    for input in inputs {
        assert_eq!(
            resolver::resolve_utterance(input),
            resolver::resolve_utterance(input),
            "Input {input:?} resolved differently on the second pass"
        );
    }
}

/// Every failure carries a sentence fit for reading back to the speaker.
#[test]
fn failures_carry_spoken_hints() {
    let failures = [
        resolver::resolve_utterance(""),
        resolver::resolve_utterance("192.168.1"),
        resolver::resolve_utterance("300.1.1.1"),
        resolver::resolve_slots(&slots([Some("sixty seven six"), Some("1"), Some("1"), Some("1")])),
    ];

    for failure in failures {
        let failure = failure.expect_err("input should not resolve");
        assert!(
            !failure.spoken_hint().is_empty(),
            "{failure:?} has no spoken hint"
        );
    }
}

/// The converter contract the resolver is built on, checked end to end.
#[test]
fn converter_properties_hold() -> anyhow::Result<()> {
    assert_eq!(numeral::convert("67"), Conversion::Converted("67".to_string()));
    assert_eq!(
        numeral::convert("sixty seven six"),
        Conversion::Converted("67.6".to_string())
    );
    assert_eq!(
        numeral::convert("two hundred"),
        Conversion::Converted("200".to_string())
    );
    assert_eq!(
        numeral::convert("twenty five"),
        Conversion::Converted("25".to_string())
    );

    // A compressed decimal is not a valid octet, so a slot carrying one
    // must be stopped by the final gate
    let gate = DottedQuad::from_str("67.6.1.1.1");
    assert!(matches!(gate, Err(ResolveError::FormatMismatch { .. })));

    Ok(())
}
