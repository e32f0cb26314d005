//! Length-adaptive tolerance for accepting a guess.

use crate::types::CharUnit;

/// References up to this length must match exactly.
const EXACT_LENGTH: usize = 3;
/// One extra allowed edit per this many units beyond `EXACT_LENGTH`.
const UNITS_PER_EDIT: usize = 6;

/// Maximum distance still accepted for `reference`, by UTF-16 length.
pub fn max_allowed_distance(reference: &str) -> usize {
    max_allowed_distance_with_unit(reference, CharUnit::Utf16)
}

/// Maximum distance still accepted for `reference`, by length in `unit`.
pub fn max_allowed_distance_with_unit(reference: &str, unit: CharUnit) -> usize {
    unit.len(reference).saturating_sub(EXACT_LENGTH) / UNITS_PER_EDIT
}
