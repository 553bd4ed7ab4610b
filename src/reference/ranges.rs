use crate::models::Sex;

/// Low/high bounds of a normal range, optionally split by sex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    Neutral { low: f64, high: f64 },
    SexSpecific { male: (f64, f64), female: (f64, f64) },
}

impl Bounds {
    /// Bounds for the given sex. Sex-specific ranges use the male values
    /// when sex is unknown.
    pub fn for_sex(&self, sex: Option<Sex>) -> (f64, f64) {
        match (*self, sex) {
            (Bounds::Neutral { low, high }, _) => (low, high),
            (Bounds::SexSpecific { female, .. }, Some(Sex::Female)) => female,
            (Bounds::SexSpecific { male, .. }, _) => male,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeInfo {
    pub canonical_key: &'static str,
    pub bounds: Bounds,
    pub units: &'static str,
}

const fn neutral(canonical_key: &'static str, low: f64, high: f64, units: &'static str) -> RangeInfo {
    RangeInfo { canonical_key, bounds: Bounds::Neutral { low, high }, units }
}

const fn by_sex(
    canonical_key: &'static str,
    male: (f64, f64),
    female: (f64, f64),
    units: &'static str,
) -> RangeInfo {
    RangeInfo { canonical_key, bounds: Bounds::SexSpecific { male, female }, units }
}

/// Fallback ranges, consulted only when a report line carries no usable range.
pub static NORMAL_RANGES: &[RangeInfo] = &[
    by_sex("hemoglobin", (13.8, 17.2), (12.1, 15.1), "g/dL"),
    neutral("wbc", 4.5, 11.0, "x10^9/L"),
    by_sex("rbc", (4.5, 5.9), (4.1, 5.1), "x10^12/L"),
    neutral("platelets", 150.0, 450.0, "x10^9/L"),
    neutral("glucose", 70.0, 100.0, "mg/dL"),
    by_sex("creatinine", (0.7, 1.3), (0.6, 1.1), "mg/dL"),
    neutral("sodium", 135.0, 145.0, "mmol/L"),
    neutral("potassium", 3.5, 5.1, "mmol/L"),
    neutral("ldl", 0.0, 100.0, "mg/dL"),
    neutral("hdl", 40.0, 60.0, "mg/dL"),
    neutral("hba1c", 4.0, 5.6, "%"),
];

pub fn lookup_range(canonical_key: &str) -> Option<&'static RangeInfo> {
    NORMAL_RANGES.iter().find(|r| r.canonical_key == canonical_key)
}
