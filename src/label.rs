//! Label normalization and validation

use crate::error::{GuardError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Lowercase letters, digits and hyphens: the charset ENS labels are usually
/// registered with.
static ENS_SAFE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("ENS charset pattern is valid"));

/// Label validator
#[derive(Debug, Clone, Default)]
pub struct LabelValidator;

impl LabelValidator {
    pub fn new() -> Self {
        Self
    }

    /// Trim surrounding whitespace and lower-case
    pub fn normalize(&self, label: &str) -> String {
        label.trim().to_lowercase()
    }

    /// Normalize `label`, failing when nothing is left
    pub fn validate(&self, label: &str) -> Result<String> {
        let normalized = self.normalize(label);
        if normalized.is_empty() {
            return Err(GuardError::validation("Label cannot be empty"));
        }
        Ok(normalized)
    }

    /// Whether the normalized label sticks to `[a-z0-9-]`.
    ///
    /// Informational only: labels outside the charset are still processed.
    pub fn is_ens_safe(&self, label: &str) -> bool {
        let normalized = self.normalize(label);
        ENS_SAFE.is_match(&normalized)
    }
}
