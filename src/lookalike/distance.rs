//! Levenshtein edit distance

/// Minimum single-character inserts, deletes and substitutions turning `a`
/// into `b`. Works on Unicode scalar values and keeps one row sized to the
/// shorter input.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = if lc == sc { 0 } else { 1 };
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
        }
    }

    row[short.len()]
}

/// Levenshtein distance when it is at most `max`, else `None`.
///
/// Only the diagonal band of width `2 * max + 1` is filled, so the cost is
/// O(len * max) instead of O(len^2). Every generated candidate sits within a
/// couple of edits of its base, which keeps scoring linear in label length.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Option<usize> {
    if a == b {
        return Some(0);
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if long.len() - short.len() > max {
        return None;
    }

    // Cells outside the band hold `far`, which can never win a `min`
    let far = max + 1;
    let width = short.len();
    let mut prev: Vec<usize> = (0..=width).map(|j| j.min(far)).collect();
    let mut curr = vec![far; width + 1];

    for i in 1..=long.len() {
        let lo = i.saturating_sub(max).max(1);
        let hi = (i + max).min(width);
        curr[lo - 1] = if lo == 1 { i.min(far) } else { far };

        for j in lo..=hi {
            let cost = if long[i - 1] == short[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost).min(far);
        }
        if hi < width {
            curr[hi + 1] = far;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[width];
    (distance <= max).then_some(distance)
}

/// Exact distance, taking the banded path first
pub fn edit_distance(a: &str, b: &str, band: usize) -> usize {
    levenshtein_within(a, b, band).unwrap_or_else(|| levenshtein(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_zero() {
        for s in ["", "a", "vitalik", "\u{0430}pple"] {
            assert_eq!(levenshtein(s, s), 0);
        }
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("cat", "act"), 2);
        assert_eq!(levenshtein("vitalik", "vtalik"), 1);
        assert_eq!(levenshtein("vitalik", "vittalik"), 1);
    }

    #[test]
    fn test_symmetry() {
        let words = ["apple", "\u{0430}pple", "aple", "flaw", "lawn", "", "x"];
        for a in words {
            for b in words {
                assert_eq!(levenshtein(a, b), levenshtein(b, a), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_banded_matches_full_within_band() {
        let words = [
            "", "a", "ab", "ba", "cat", "act", "cta", "ccat", "kitten", "sitting",
            "vitalik", "vtalik", "vittalik", "\u{0430}pple", "apple", "aple", "appel",
        ];
        for a in words {
            for b in words {
                let full = levenshtein(a, b);
                for max in 0..4 {
                    let banded = levenshtein_within(a, b, max);
                    if full <= max {
                        assert_eq!(banded, Some(full), "{} vs {} within {}", a, b, max);
                    } else {
                        assert_eq!(banded, None, "{} vs {} within {}", a, b, max);
                    }
                }
                assert_eq!(edit_distance(a, b, 2), full);
            }
        }
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // Cyrillic a is two bytes in UTF-8 but a single substitution
        assert_eq!(levenshtein("apple", "\u{0430}pple"), 1);
    }
}
