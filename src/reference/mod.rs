//! Static reference data: plain-language terms, fallback normal ranges and
//! panel keyword lists. Everything here is immutable for the life of the
//! process.

pub mod panels;
pub mod ranges;
pub mod terms;

pub use panels::{Panel, PANEL_KEYWORDS};
pub use ranges::{lookup_range, Bounds, RangeInfo, NORMAL_RANGES};
pub use terms::{lookup_term, TermInfo, MEDICAL_TERMS};

/// Lower-cased, trimmed form of a test name used for table lookups.
pub fn canonical_key(test_name: &str) -> String {
    test_name.trim().to_lowercase()
}
