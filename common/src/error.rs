//! Failure taxonomy for one resolution attempt.
//!
//! Every variant is recoverable and local to a single call. The resolver
//! never panics on malformed speech; callers decide how to surface these.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Nothing usable was spoken: an empty utterance, or all four slots empty.
    #[error("no spoken input to resolve")]
    NoInput,

    /// The utterance produced a number of octets other than four.
    #[error("expected 4 octets, found {found}")]
    OctetCountMismatch { found: usize },

    /// An octet candidate was non-numeric or outside 0-255.
    #[error("invalid octet value: {octet:?}")]
    InvalidOctetValue { octet: String },

    /// The assembled candidate does not match the dotted-quad grammar.
    #[error("not a dotted-quad address: {candidate:?}")]
    FormatMismatch { candidate: String },
}

impl ResolveError {
    /// A sentence suitable for reading back to the speaker.
    pub fn spoken_hint(&self) -> &'static str {
        match self {
            Self::NoInput => {
                "I didn't catch an IP address. Please say one, \
                 like one nine two point one six eight point zero point one."
            }
            Self::OctetCountMismatch { .. } => {
                "I couldn't understand the IP address. \
                 Please provide all four parts of a valid IP address."
            }
            Self::InvalidOctetValue { .. } | Self::FormatMismatch { .. } => {
                "Please provide a valid IP address with numbers between 0 and 255."
            }
        }
    }
}
