//! Core types and structures for ensguard

use serde::{Deserialize, Serialize, Serializer};

/// Marker written in place of a punycode form that IDNA refuses
pub const INVALID_IDNA: &str = "<invalid-idna>";

/// Default number of ranked variants handed to exporters
pub const DEFAULT_MAX_VARIANTS: usize = 200;

/// Default number of confusable alternatives tried per position
pub const DEFAULT_MAX_PER_CHAR: usize = 2;

/// Hard ceiling on unioned candidates before scoring
pub const DEFAULT_CANDIDATE_CEILING: usize = 50_000;

/// Mutation strategy that produced a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantKind {
    #[serde(rename = "confusable")]
    Confusable,
    #[serde(rename = "neighbor")]
    Neighbor,
    #[serde(rename = "omit")]
    Omission,
    #[serde(rename = "dup")]
    Duplication,
    #[serde(rename = "swap")]
    Swap,
}

impl VariantKind {
    /// Generation order. The first strategy to produce a string owns it.
    pub const EVALUATION_ORDER: [VariantKind; 5] = [
        VariantKind::Confusable,
        VariantKind::Neighbor,
        VariantKind::Omission,
        VariantKind::Duplication,
        VariantKind::Swap,
    ];

    /// Ranking priority, lower sorts first
    pub fn priority(&self) -> u8 {
        match self {
            VariantKind::Confusable => 0,
            VariantKind::Neighbor => 1,
            VariantKind::Swap => 2,
            VariantKind::Duplication => 3,
            VariantKind::Omission => 4,
        }
    }

    /// Short reason attached to every variant of this kind
    pub fn note(&self) -> &'static str {
        match self {
            VariantKind::Confusable => "unicode look-alike",
            VariantKind::Neighbor => "keyboard neighbor",
            VariantKind::Omission => "omission",
            VariantKind::Duplication => "duplication",
            VariantKind::Swap => "adjacent swap",
        }
    }

    /// Longer description used by `explain`
    pub fn description(&self) -> &'static str {
        match self {
            VariantKind::Confusable => "Unicode look-alike characters swapped in.",
            VariantKind::Neighbor => "Single-key keyboard neighbor typo.",
            VariantKind::Omission => "One-character omission.",
            VariantKind::Duplication => "Duplicate a character.",
            VariantKind::Swap => "Swap adjacent characters.",
        }
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantKind::Confusable => write!(f, "confusable"),
            VariantKind::Neighbor => write!(f, "neighbor"),
            VariantKind::Omission => write!(f, "omit"),
            VariantKind::Duplication => write!(f, "dup"),
            VariantKind::Swap => write!(f, "swap"),
        }
    }
}

/// ASCII-compatible (punycode) form of a variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsciiEncoding {
    Valid(String),
    Invalid,
}

impl AsciiEncoding {
    pub fn is_valid(&self) -> bool {
        matches!(self, AsciiEncoding::Valid(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            AsciiEncoding::Valid(s) => s,
            AsciiEncoding::Invalid => INVALID_IDNA,
        }
    }
}

impl std::fmt::Display for AsciiEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AsciiEncoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A ranked look-alike of the base label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredVariant {
    pub variant: String,
    pub kind: VariantKind,
    /// Levenshtein distance to the base label
    pub distance: usize,
    /// 0..1, 1 = extremely confusable
    pub visual_score: f64,
    pub punycode: AsciiEncoding,
    pub note: String,
}

impl ScoredVariant {
    /// Character count of the variant
    pub fn char_len(&self) -> usize {
        self.variant.chars().count()
    }
}

/// Tunables for the generation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Maximum ranked variants returned
    pub max_variants: usize,
    /// Confusable alternatives tried per position in the single-position pass
    pub max_per_char: usize,
    /// Candidates beyond this count are dropped before scoring
    pub candidate_ceiling: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            max_variants: DEFAULT_MAX_VARIANTS,
            max_per_char: DEFAULT_MAX_PER_CHAR,
            candidate_ceiling: DEFAULT_CANDIDATE_CEILING,
        }
    }
}
