//! The resolution engine: spoken numerals in, validated addresses out.
//!
//! Everything in this crate is pure and synchronous. The only process-wide
//! state is the read-only number-word table in `spokr-common`, so any
//! number of resolutions may run concurrently without coordination.

pub mod numeral;
pub mod resolver;
