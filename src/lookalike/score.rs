//! Visual confusability heuristic
//!
//! Additive score, clamped to 1.0:
//! - +0.5 if lengths are equal
//! - +0.2 if, at equal length, every differing position is a listed confusable
//! - +0.2 if edit distance is at most 1
//! - +0.1 if the hyphen/alpha/digit layout is identical
//!
//! Exported watchlists depend on these exact weights.

use super::distance::levenshtein_within;
use super::tables;

const EQUAL_LENGTH: u8 = 5;
const CONFUSABLE_ONLY: u8 = 2;
const NEAR_EDIT: u8 = 2;
const SAME_LAYOUT: u8 = 1;
const MAX_TENTHS: u8 = 10;

/// Score in tenths, 0..=10. Integer arithmetic keeps the full score at exactly 1.0.
pub fn visual_tenths(base: &str, candidate: &str) -> u8 {
    // Only "at most one edit" matters here
    let distance = levenshtein_within(base, candidate, 1).unwrap_or(2);
    visual_tenths_at(base, candidate, distance)
}

/// Same as [`visual_tenths`] for a caller that already knows the edit distance
pub fn visual_tenths_at(base: &str, candidate: &str, distance: usize) -> u8 {
    let base_chars: Vec<char> = base.chars().collect();
    let cand_chars: Vec<char> = candidate.chars().collect();
    let same_length = base_chars.len() == cand_chars.len();

    let mut score = 0;
    if same_length {
        score += EQUAL_LENGTH;
    }
    if same_length
        && base_chars
            .iter()
            .zip(&cand_chars)
            .all(|(&b, &c)| b == c || tables::is_confusable(b, c))
    {
        score += CONFUSABLE_ONLY;
    }
    if distance <= 1 {
        score += NEAR_EDIT;
    }
    if layout_skeleton(base) == layout_skeleton(candidate) {
        score += SAME_LAYOUT;
    }

    score.min(MAX_TENTHS)
}

/// Visual confusability in [0, 1]
pub fn visual_score(base: &str, candidate: &str) -> f64 {
    f64::from(visual_tenths(base, candidate)) / f64::from(MAX_TENTHS)
}

/// Visual confusability when the edit distance is already known
pub fn visual_score_at(base: &str, candidate: &str, distance: usize) -> f64 {
    f64::from(visual_tenths_at(base, candidate, distance)) / f64::from(MAX_TENTHS)
}

/// Positional shape of a label: `-` hyphen, `a` letter, `d` digit, `?` other.
///
/// Only ASCII `0-9` count as digits. Vulgar fractions, superscripts and
/// non-ASCII decimal digits fall into `?`.
pub fn layout_skeleton(label: &str) -> String {
    label
        .chars()
        .map(|ch| match ch {
            '-' => '-',
            c if c.is_alphabetic() => 'a',
            c if c.is_ascii_digit() => 'd',
            _ => '?',
        })
        .collect()
}
