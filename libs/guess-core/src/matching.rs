//! Judging a typed guess against the accepted answer(s).

use crate::distance::distance_with_unit;
use crate::normalize::normalize;
use crate::threshold::max_allowed_distance_with_unit;
use crate::types::{CharUnit, MatchSettings};
use serde::{Deserialize, Serialize};

/// Result of comparing a guess to a reference answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the guess is close enough.
    pub accepted: bool,
    /// Edit distance from the normalized guess to the normalized reference.
    pub distance: usize,
    /// Largest distance that is still accepted.
    pub tolerance: usize,
    /// Similarity score between 0.0 and 1.0.
    pub similarity: f64,
    /// Normalized guess (for display).
    pub guess_normalized: String,
    /// Normalized reference (for display).
    pub reference_normalized: String,
}

/// Judge a guess against a single reference answer.
///
/// An empty guess (after normalization) is never accepted, even when the
/// reference normalizes to nothing as well.
pub fn judge_guess(guess: &str, reference: &str, settings: &MatchSettings) -> Verdict {
    let guess_normalized = normalize(guess, settings.normalization);
    let reference_normalized = normalize(reference, settings.normalization);

    let distance = distance_with_unit(&guess_normalized, &reference_normalized, settings.unit);
    let tolerance = max_allowed_distance_with_unit(&reference_normalized, settings.unit)
        .saturating_add(settings.extra_tolerance);
    let accepted = !guess_normalized.is_empty() && distance <= tolerance;

    tracing::debug!(
        guess = %guess_normalized,
        reference = %reference_normalized,
        distance,
        tolerance,
        accepted,
        "judged guess"
    );

    Verdict {
        accepted,
        distance,
        tolerance,
        similarity: similarity(
            distance,
            &guess_normalized,
            &reference_normalized,
            settings.unit,
        ),
        guess_normalized,
        reference_normalized,
    }
}

/// Judge a guess against every accepted answer.
///
/// Returns the closest accepted verdict, otherwise the closest rejected one.
/// Ties go to the earlier reference. `None` when there are no references.
pub fn judge_guess_any<I, S>(guess: &str, references: I, settings: &MatchSettings) -> Option<Verdict>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let best = references
        .into_iter()
        .map(|reference| judge_guess(guess, reference.as_ref(), settings))
        .min_by_key(|verdict| (!verdict.accepted, verdict.distance));

    if let Some(ref verdict) = best {
        tracing::trace!(
            reference = %verdict.reference_normalized,
            accepted = verdict.accepted,
            "closest reference"
        );
    }

    best
}

/// Normalized similarity (0.0 to 1.0) derived from a distance.
fn similarity(distance: usize, a: &str, b: &str, unit: CharUnit) -> f64 {
    let max_len = unit.len(a).max(unit.len(b));
    if max_len == 0 {
        return 1.0; // Both empty strings are identical
    }

    (1.0 - distance as f64 / max_len as f64).max(0.0)
}
