//! Assembles and validates a full IPv4 address from speech.
//!
//! Two entry points cover the two ways a voice interaction delivers an
//! address: one free-form utterance ("one nine two point one six eight
//! point zero point one"), or four separately spoken octet slots. Both
//! funnel every assembled candidate through [`DottedQuad::from_str`], the
//! authoritative gate, before a collaborator ever sees it.
//!
//! Resolution is a single deterministic pass: split, convert each octet,
//! assemble, validate. No retries, no I/O, no state between calls.

use std::str::FromStr;

use spokr_common::address::{DottedQuad, OctetSlots};
use spokr_common::debug;
use spokr_common::error::ResolveError;

use crate::numeral::{self, Conversion};

/// Resolves one free-form utterance into a validated address.
///
/// The literal word sequence " point " acts as the octet separator, next
/// to plain dots. Empty split parts are skipped, so stray separators do
/// not change the octet count. One octet outside 0-255 aborts the whole
/// resolution; silently dropping it would shift the remaining octets.
pub fn resolve_utterance(raw: &str) -> Result<DottedQuad, ResolveError> {
    if raw.trim().is_empty() {
        return Err(ResolveError::NoInput);
    }

    let separated = raw.replace(" point ", ".");
    let parts: Vec<&str> = separated.split('.').collect();
    debug!(?parts, "split utterance into octet candidates");

    let octets = convert_octets(&parts)?;
    if octets.len() != 4 {
        return Err(ResolveError::OctetCountMismatch {
            found: octets.len(),
        });
    }

    finalize(octets)
}

/// Resolves four separately spoken octet slots into a validated address.
///
/// Slot phrases are converted without per-octet checks; a slot that
/// converts to something unusable (out of range, or a compressed decimal
/// like "67.6") is caught by the final gate instead.
pub fn resolve_slots(slots: &OctetSlots) -> Result<DottedQuad, ResolveError> {
    let values = slots.spoken_values();
    if values.is_empty() {
        return Err(ResolveError::NoInput);
    }

    let octets: Vec<String> = values
        .into_iter()
        .map(|value| numeral::convert(value).into_value())
        .collect();
    debug!(?octets, "converted octet slots");

    if octets.len() != 4 {
        return Err(ResolveError::OctetCountMismatch {
            found: octets.len(),
        });
    }

    finalize(octets)
}

/// Converts each non-empty part and accepts it only as a full octet:
/// all digits, value in 0-255.
fn convert_octets(parts: &[&str]) -> Result<Vec<String>, ResolveError> {
    let mut octets: Vec<String> = Vec::with_capacity(4);

    for part in parts {
        if part.is_empty() {
            continue;
        }

        let octet = match numeral::convert(part) {
            Conversion::Converted(value) => value,
            Conversion::Unchanged(original) => {
                return Err(ResolveError::InvalidOctetValue { octet: original });
            }
        };

        if !is_valid_octet(&octet) {
            return Err(ResolveError::InvalidOctetValue { octet });
        }

        octets.push(octet);
    }

    Ok(octets)
}

fn is_valid_octet(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.bytes().all(|byte| byte.is_ascii_digit())
        && candidate.parse::<u64>().is_ok_and(|value| value <= 255)
}

fn finalize(octets: Vec<String>) -> Result<DottedQuad, ResolveError> {
    let candidate = octets.join(".");
    let quad = DottedQuad::from_str(&candidate)?;
    debug!(address = %quad, "resolved spoken target");
    Ok(quad)
}
