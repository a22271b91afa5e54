//! Static look-alike and keyboard tables
//!
//! A small, high-signal confusable set for lowercase ASCII-focused labels.
//! Exhaustive Unicode tables are noisy and are not used here.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Confusables per base character, most convincing first.
pub(crate) const CONFUSABLE_ENTRIES: &[(char, &[char])] = &[
    ('a', &['\u{0430}']),             // Cyrillic a
    ('c', &['\u{0441}']),             // Cyrillic es
    ('e', &['\u{0435}']),             // Cyrillic ie
    ('i', &['\u{0456}']),             // Cyrillic i
    ('j', &['\u{0458}']),             // Cyrillic je
    ('o', &['\u{043e}', '\u{03bf}']), // Cyrillic o, Greek omicron
    ('p', &['\u{0440}']),             // Cyrillic er
    ('s', &['\u{0455}']),             // Cyrillic dze
    ('x', &['\u{0445}', '\u{03c7}']), // Cyrillic ha, Greek chi
    ('y', &['\u{0443}']),             // Cyrillic u
    ('h', &['\u{043d}']),             // Cyrillic en
    ('k', &['\u{043a}']),             // Cyrillic ka
    ('m', &['\u{043c}']),             // Cyrillic em
    ('t', &['\u{0442}']),             // Cyrillic te
    ('b', &['\u{0463}']),             // Cyrillic yat
    ('g', &['\u{0261}']),             // Latin script g
    ('l', &['\u{04cf}', '\u{0131}']), // Cyrillic palochka, dotless i
    ('u', &['\u{044e}']),             // Cyrillic yu (loose)
    ('n', &['\u{0578}']),             // Armenian vo
    ('v', &['\u{03bd}']),             // Greek nu
    ('r', &['\u{0433}']),             // Cyrillic ghe (loose)
    ('w', &['\u{051d}']),             // Cyrillic we
    ('f', &['\u{017f}']),             // long s
    ('q', &['\u{051b}']),             // Cyrillic qa
    ('z', &['\u{01b6}']),             // z with stroke
    ('d', &['\u{0501}']),             // Cyrillic komi de
    ('0', &['o', '\u{043e}']),
    ('1', &['l', 'i', '\u{04cf}', '\u{0131}']),
    ('3', &['\u{0437}']),             // Cyrillic ze
    ('5', &['\u{0455}']),
];

/// US QWERTY single-key neighbors (lowercase letters only).
const KEYBOARD_ENTRIES: &[(char, &str)] = &[
    ('q', "was"), ('w', "qesad"), ('e', "wsrdf"), ('r', "edft"), ('t', "rfgy"),
    ('y', "tghu"), ('u', "yjhki"), ('i', "ujklo"), ('o', "iklp"), ('p', "ol"),
    ('a', "qwsz"), ('s', "qweadzx"), ('d', "wersfxc"), ('f', "ertdgcv"), ('g', "rtyfhvb"),
    ('h', "tyugjbn"), ('j', "yuihknm"), ('k', "uiojm"), ('l', "opk"), ('z', "asx"),
    ('x', "zsdc"), ('c', "xdfv"), ('v', "cfgb"), ('b', "vghn"), ('n', "bhjm"),
    ('m', "njk"),
];

static CONFUSABLES: Lazy<HashMap<char, &'static [char]>> =
    Lazy::new(|| CONFUSABLE_ENTRIES.iter().copied().collect());

static KEY_NEIGHBORS: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| KEYBOARD_ENTRIES.iter().copied().collect());

/// Ordered confusable alternatives for `ch`; empty when none are known
pub fn confusables(ch: char) -> &'static [char] {
    CONFUSABLES.get(&ch).copied().unwrap_or(&[])
}

/// Whether `candidate` is a listed confusable of `base`
pub fn is_confusable(base: char, candidate: char) -> bool {
    confusables(base).contains(&candidate)
}

/// Keyboard neighbors of `ch`; empty when `ch` is not a letter key
pub fn key_neighbors(ch: char) -> impl Iterator<Item = char> {
    KEY_NEIGHBORS.get(&ch).copied().unwrap_or("").chars()
}
