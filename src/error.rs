//! Error types surfaced by the long-distance matcher.
//!
//! Only two conditions are ever surfaced to a caller — everything else
//! (stale index entries, checksum mismatches, window overflow) is
//! recovered silently inside the affected module. A plain hand-rolled enum
//! with `Display`/`Error` impls, no `thiserror`/`anyhow` inside the library
//! itself.

use core::fmt;

/// Errors returned by the long-distance matcher's public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LdmError {
    /// A tuning parameter fell outside its documented range even after the
    /// zero-value defaulting rules were applied. Context construction
    /// fails with this error; no context is created.
    ParameterOutOfBounds {
        /// Name of the offending field (`"windowLog"`, `"hashLog"`, …).
        field: &'static str,
        /// The out-of-range value that was supplied (after defaulting).
        value: u32,
    },
    /// The raw sequence store filled up before a chunk finished generating
    /// sequences. The sequences produced so far remain valid and may be
    /// consumed; the caller should treat this as "stop feeding new input
    /// until the store is drained", not as a fatal condition.
    DstSizeTooSmall,
}

impl fmt::Display for LdmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LdmError::ParameterOutOfBounds { field, value } => {
                write!(f, "parameter '{field}' out of bounds: {value}")
            }
            LdmError::DstSizeTooSmall => {
                f.write_str("raw sequence store is full; partial output is still valid")
            }
        }
    }
}

impl std::error::Error for LdmError {}
