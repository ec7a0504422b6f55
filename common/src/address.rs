//! # Spoken Address Model
//!
//! Defines the validated output of a resolution and the slot-based input.
//!
//! A [`DottedQuad`] is only ever constructed through its `FromStr` impl,
//! which is the authoritative gate every assembled candidate passes before
//! collaborators may use it:
//! * Grammar: four components of 1-3 ASCII digits joined by `.`.
//! * Range: every component is an integer in 0-255.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::ResolveError;

/// A validated dotted-quad IPv4 address.
///
/// The textual form is preserved exactly as assembled from speech, so
/// leading zeros survive ("007" stays "007"). Use [`DottedQuad::to_ipv4`]
/// for the normalized numeric form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedQuad {
    repr: String,
    octets: [u8; 4],
}

impl DottedQuad {
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    pub fn to_ipv4(&self) -> Ipv4Addr {
        let [a, b, c, d] = self.octets;
        Ipv4Addr::new(a, b, c, d)
    }
}

impl fmt::Display for DottedQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl FromStr for DottedQuad {
    type Err = ResolveError;

    /// Validates a candidate string against the dotted-quad grammar and
    /// octet range.
    ///
    /// The grammar check runs first and reports [`ResolveError::FormatMismatch`];
    /// a well-formed component outside 0-255 reports
    /// [`ResolveError::InvalidOctetValue`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s.split('.').collect();

        let well_formed = components.len() == 4
            && components.iter().all(|component| {
                !component.is_empty()
                    && component.len() <= 3
                    && component.bytes().all(|byte| byte.is_ascii_digit())
            });

        if !well_formed {
            return Err(ResolveError::FormatMismatch {
                candidate: s.to_string(),
            });
        }

        let mut octets = [0u8; 4];
        for (slot, component) in octets.iter_mut().zip(&components) {
            // 1-3 digits, so the only possible parse failure is overflow
            *slot = component
                .parse::<u8>()
                .map_err(|_| ResolveError::InvalidOctetValue {
                    octet: component.to_string(),
                })?;
        }

        Ok(Self {
            repr: s.to_string(),
            octets,
        })
    }
}

/// The four positional slots of a voice interaction, one spoken phrase per
/// octet. Any slot may be absent when the speaker trailed off.
#[derive(Debug, Clone, Default)]
pub struct OctetSlots {
    pub first: Option<String>,
    pub second: Option<String>,
    pub third: Option<String>,
    pub fourth: Option<String>,
}

impl OctetSlots {
    /// Returns the non-empty slot values in positional order.
    pub fn spoken_values(&self) -> Vec<&str> {
        [&self.first, &self.second, &self.third, &self.fourth]
            .into_iter()
            .filter_map(|slot| slot.as_deref())
            .filter(|value| !value.is_empty())
            .collect()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
