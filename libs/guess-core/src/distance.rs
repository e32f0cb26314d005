//! Edit distance between a guess and a reference answer.
//!
//! Optimal string alignment (restricted Damerau-Levenshtein): insert, delete,
//! substitute and adjacent swap each cost one, with one exception. A space in
//! the source lined up against `-` or `'` in the target costs nothing, so
//! "rock n roll" matches "rock-n-roll" exactly. The exception only applies in
//! that direction, which makes the metric asymmetric for such pairs.

use crate::types::CharUnit;

const SPACE: u32 = ' ' as u32;
const HYPHEN: u32 = '-' as u32;
const APOSTROPHE: u32 = '\'' as u32;

/// Distance from `source` to `target`, counted in UTF-16 code units.
pub fn distance(source: &str, target: &str) -> usize {
    distance_with_unit(source, target, CharUnit::Utf16)
}

/// Distance from `source` to `target`, counted in the given unit.
pub fn distance_with_unit(source: &str, target: &str, unit: CharUnit) -> usize {
    edit_distance(&unit.units(source), &unit.units(target))
}

fn substitution_cost(source: u32, target: u32) -> usize {
    if source == target || (source == SPACE && (target == HYPHEN || target == APOSTROPHE)) {
        0
    } else {
        1
    }
}

fn edit_distance(source: &[u32], target: &[u32]) -> usize {
    let m = source.len();
    let n = target.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Transpositions look two rows back, so keep three rows.
    let mut before_prev = vec![0; n + 1];
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = substitution_cost(source[i - 1], target[j - 1]);

            let mut best = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution

            if i > 1
                && j > 1
                && source[i - 1] == target[j - 2]
                && source[i - 2] == target[j - 1]
            {
                best = best.min(before_prev[j - 2] + cost); // transposition
            }

            curr[j] = best;
        }

        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
