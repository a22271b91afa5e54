//! Deduplication, scoring and ordering of candidates

use super::{distance::edit_distance, encode, score};
use crate::types::{ScoredVariant, VariantKind};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Generated candidates are at most two edits from their base; the banded
/// distance covers them and anything farther falls back to the full table.
const DISTANCE_BAND: usize = 2;

/// A raw candidate tagged with the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub variant: String,
    pub kind: VariantKind,
}

/// Drop the base label and repeated strings, keeping the first producer.
///
/// Input must already be in strategy evaluation order.
pub fn dedup(base: &str, candidates: impl IntoIterator<Item = Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| c.variant != base)
        .filter(|c| seen.insert(c.variant.clone()))
        .collect()
}

/// Build the immutable record for one candidate
pub fn score_candidate(base: &str, candidate: Candidate) -> ScoredVariant {
    let distance = edit_distance(base, &candidate.variant, DISTANCE_BAND);
    let visual_score = score::visual_score_at(base, &candidate.variant, distance);
    let punycode = encode::to_ascii(&candidate.variant);

    ScoredVariant {
        punycode,
        distance,
        visual_score,
        note: candidate.kind.note().to_string(),
        kind: candidate.kind,
        variant: candidate.variant,
    }
}

/// A scored variant with its length gap to the base, computed once for sorting
struct Ranked {
    length_gap: usize,
    scored: ScoredVariant,
}

/// Danger ordering: higher visual score, then closer edit distance, then
/// strategy priority, then smaller length gap.
///
/// The final comparison on the variant string is not part of the danger
/// ranking. It only settles exact ties so the output never depends on the
/// order candidates arrived in.
fn compare(a: &Ranked, b: &Ranked) -> Ordering {
    let (x, y) = (&a.scored, &b.scored);
    y.visual_score
        .total_cmp(&x.visual_score)
        .then_with(|| x.distance.cmp(&y.distance))
        .then_with(|| x.kind.priority().cmp(&y.kind.priority()))
        .then_with(|| a.length_gap.cmp(&b.length_gap))
        .then_with(|| x.variant.cmp(&y.variant))
}

/// Score, sort and cap deduplicated candidates
pub fn rank(base: &str, candidates: Vec<Candidate>, cap: usize) -> Vec<ScoredVariant> {
    let base_len = base.chars().count();
    let mut ranked: Vec<Ranked> = candidates
        .into_iter()
        .map(|c| {
            let scored = score_candidate(base, c);
            Ranked {
                length_gap: scored.char_len().abs_diff(base_len),
                scored,
            }
        })
        .collect();

    ranked.sort_by(compare);
    ranked.truncate(cap);
    ranked.into_iter().map(|r| r.scored).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(variant: &str, kind: VariantKind) -> Candidate {
        Candidate {
            variant: variant.to_string(),
            kind,
        }
    }

    #[test]
    fn test_dedup_keeps_first_producer_and_drops_base() {
        let input = vec![
            cand("cat", VariantKind::Confusable),
            cand("cta", VariantKind::Neighbor),
            cand("ct", VariantKind::Omission),
            cand("cta", VariantKind::Swap),
        ];
        let out = dedup("cat", input);
        assert_eq!(
            out,
            vec![cand("cta", VariantKind::Neighbor), cand("ct", VariantKind::Omission)]
        );
    }

    #[test]
    fn test_score_candidate_fields() {
        let v = score_candidate("apple", cand("\u{0430}pple", VariantKind::Confusable));
        assert_eq!(v.distance, 1);
        assert_eq!(v.visual_score, 1.0);
        assert_eq!(v.note, "unicode look-alike");
        assert!(v.punycode.as_str().starts_with("xn--"));
    }

    #[test]
    fn test_rank_orders_by_composite_key() {
        let input = vec![
            cand("ct", VariantKind::Omission),          // 0.2, d1
            cand("act", VariantKind::Swap),             // 0.6, d2
            cand("cst", VariantKind::Neighbor),         // 0.8, d1
            cand("\u{0441}at", VariantKind::Confusable), // 1.0, d1
            cand("caat", VariantKind::Duplication),     // 0.2, d1
        ];
        let ranked = rank("cat", input, 10);
        let order: Vec<&str> = ranked.iter().map(|v| v.variant.as_str()).collect();
        assert_eq!(order, vec!["\u{0441}at", "cst", "act", "caat", "ct"]);
    }

    #[test]
    fn test_rank_truncates() {
        let input = vec![
            cand("ct", VariantKind::Omission),
            cand("act", VariantKind::Swap),
            cand("cst", VariantKind::Neighbor),
        ];
        let ranked = rank("cat", input, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].variant, "cst");
    }

    #[test]
    fn test_exact_ties_ignore_input_order() {
        let a = vec![cand("cst", VariantKind::Neighbor), cand("cqt", VariantKind::Neighbor)];
        let b = vec![cand("cqt", VariantKind::Neighbor), cand("cst", VariantKind::Neighbor)];
        assert_eq!(rank("cat", a, 10), rank("cat", b, 10));
    }
}
