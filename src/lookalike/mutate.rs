//! Mutation strategies producing candidate look-alikes
//!
//! Each strategy is a pure function of the normalized label. Positions are
//! character positions, so multi-byte confusables never split a code point.

use super::tables;
use crate::types::VariantKind;
use std::collections::BTreeSet;

/// Run one strategy against `base`.
///
/// `limit` bounds the quadratic confusable pass; the other strategies emit at
/// most a few strings per position.
pub fn mutate(kind: VariantKind, base: &str, max_per_char: usize, limit: usize) -> BTreeSet<String> {
    match kind {
        VariantKind::Confusable => confusables(base, max_per_char, limit),
        VariantKind::Neighbor => neighbors(base),
        VariantKind::Omission => omissions(base),
        VariantKind::Duplication => duplications(base),
        VariantKind::Swap => swaps(base),
    }
}

/// Swap in look-alike characters.
///
/// Single positions use up to `max_per_char` alternatives. Every pair of
/// positions is also replaced at once, restricted to the first alternative of
/// each character to keep the pass quadratic. Generation stops once `limit`
/// distinct strings exist.
pub fn confusables(base: &str, max_per_char: usize, limit: usize) -> BTreeSet<String> {
    let chars: Vec<char> = base.chars().collect();
    let mut out = BTreeSet::new();

    for (i, &ch) in chars.iter().enumerate() {
        for &alt in tables::confusables(ch).iter().take(max_per_char) {
            if out.len() >= limit {
                return out;
            }
            let mut variant = chars.clone();
            variant[i] = alt;
            out.insert(variant.into_iter().collect());
        }
    }

    for i in 0..chars.len() {
        let Some(&first) = tables::confusables(chars[i]).first() else {
            continue;
        };
        for j in (i + 1)..chars.len() {
            let Some(&second) = tables::confusables(chars[j]).first() else {
                continue;
            };
            if out.len() >= limit {
                return out;
            }
            let mut variant = chars.clone();
            variant[i] = first;
            variant[j] = second;
            out.insert(variant.into_iter().collect());
        }
    }

    out
}

/// Replace one character with each adjacent key
pub fn neighbors(base: &str) -> BTreeSet<String> {
    let chars: Vec<char> = base.chars().collect();
    let mut out = BTreeSet::new();

    for (i, &ch) in chars.iter().enumerate() {
        for key in tables::key_neighbors(ch) {
            let mut variant = chars.clone();
            variant[i] = key;
            out.insert(variant.into_iter().collect());
        }
    }

    out
}

/// Drop one character
pub fn omissions(base: &str) -> BTreeSet<String> {
    let chars: Vec<char> = base.chars().collect();
    (0..chars.len())
        .map(|i| {
            chars[..i]
                .iter()
                .chain(chars[i + 1..].iter())
                .collect::<String>()
        })
        .collect()
}

/// Double one character in place
pub fn duplications(base: &str) -> BTreeSet<String> {
    let chars: Vec<char> = base.chars().collect();
    (0..chars.len())
        .map(|i| {
            let mut variant = chars.clone();
            variant.insert(i + 1, chars[i]);
            variant.into_iter().collect::<String>()
        })
        .collect()
}

/// Swap each adjacent pair
pub fn swaps(base: &str) -> BTreeSet<String> {
    let chars: Vec<char> = base.chars().collect();
    (0..chars.len().saturating_sub(1))
        .map(|i| {
            let mut variant = chars.clone();
            variant.swap(i, i + 1);
            variant.into_iter().collect::<String>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_omissions_one_per_position() {
        let out = omissions("vitalik");
        assert_eq!(
            out,
            set(&["italik", "vtalik", "vialik", "vitlik", "vitaik", "vitalk", "vitali"])
        );
    }

    #[test]
    fn test_omissions_collapse_repeats() {
        // Removing either p of "apple" yields the same string
        assert_eq!(omissions("apple"), set(&["pple", "aple", "appe", "appl"]));
    }

    #[test]
    fn test_swaps() {
        assert_eq!(swaps("cat"), set(&["act", "cta"]));
        assert!(swaps("a").is_empty());
        assert!(swaps("").is_empty());
    }

    #[test]
    fn test_duplications() {
        assert_eq!(duplications("cat"), set(&["ccat", "caat", "catt"]));
    }

    #[test]
    fn test_neighbors_substitute_single_position() {
        let out = neighbors("ab");
        // a: qwsz, b: vghn
        assert_eq!(out.len(), 8);
        assert!(out.contains("qb"));
        assert!(out.contains("an"));
        assert!(!out.contains("ab"));
    }

    #[test]
    fn test_neighbors_skip_unmapped_characters() {
        assert!(neighbors("42-").is_empty());
    }

    #[test]
    fn test_confusables_single_and_pairs() {
        let out = confusables("apple", 2, usize::MAX);
        assert!(out.contains("\u{0430}pple"));
        assert!(out.contains("a\u{0440}ple"));
        assert!(out.contains("\u{0430}\u{0440}ple"));
        assert!(out.contains("app\u{04cf}e"));
        assert!(out.contains("app\u{0131}e"));
        // pair pass only uses the first alternative
        assert!(!out.contains("\u{0430}pp\u{0131}e"));
        assert!(out.contains("\u{0430}pp\u{04cf}e"));
    }

    #[test]
    fn test_confusables_respect_per_char_limit() {
        let out = confusables("1", 2, usize::MAX);
        assert_eq!(out, set(&["l", "i"]));
        let out = confusables("1", 4, usize::MAX);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_confusables_counts_for_ox() {
        // o: 2 singles, x: 2 singles, 1 pair
        assert_eq!(confusables("ox", 2, usize::MAX).len(), 5);
    }

    #[test]
    fn test_confusables_stop_at_limit() {
        let long = "abcdefghijklmnopqrstuvwxyz".repeat(4);
        assert_eq!(confusables(&long, 2, 50).len(), 50);
        // singles come first, so a small limit keeps only single swaps
        let out = confusables("apple", 2, 3);
        assert_eq!(out.len(), 3);
        assert!(out.contains("\u{0430}pple"));
    }

    #[test]
    fn test_mutate_dispatches() {
        assert_eq!(mutate(VariantKind::Swap, "cat", 2, 100), swaps("cat"));
        assert_eq!(mutate(VariantKind::Omission, "cat", 2, 100), omissions("cat"));
    }
}
