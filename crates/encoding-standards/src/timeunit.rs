//! Time unit canonicalization.

use std::borrow::Cow;

/// Canonical form of a time unit.
///
/// `day` (day of week) only exists as a single unit; inside any other unit
/// its first occurrence is read as `date` (day of month). Returns the input
/// unchanged otherwise.
pub fn normalize_time_unit(unit: &str) -> Cow<'_, str> {
    if unit != "day" && unit.contains("day") {
        Cow::Owned(unit.replacen("day", "date", 1))
    } else {
        Cow::Borrowed(unit)
    }
}

/// Units whose buckets are ordinal by default rather than a continuous time
/// axis.
pub fn is_discrete_by_default(unit: Option<&str>) -> bool {
    matches!(unit, Some("hours" | "day" | "month" | "quarter"))
}
