use colored::*;
use spokr_common::address::DottedQuad;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// Key/value rows describing one resolved address.
pub fn quad_details(quad: &DottedQuad) -> Vec<Detail> {
    let [a, b, c, d] = quad.octets();

    let mut details: Vec<Detail> = vec![
        (
            String::from("Target"),
            quad.as_str().color(colors::IPV4_ADDR),
        ),
        (
            String::from("Octets"),
            format!("{a} {b} {c} {d}").normal(),
        ),
    ];

    // Only worth a row when the spoken form carried leading zeros
    let normalized: String = quad.to_ipv4().to_string();
    if normalized != quad.as_str() {
        details.push((String::from("IPv4"), normalized.normal()));
    }

    details
}
