//! Look-alike generation and risk scoring
//!
//! Pipeline: normalized label -> five mutation strategies (fixed order) ->
//! dedup -> distance, visual score and punycode per candidate -> ranked list.

pub mod distance;
pub mod encode;
pub mod mutate;
pub mod rank;
pub mod score;
pub mod tables;

pub use distance::levenshtein;
pub use encode::to_ascii;
pub use rank::Candidate;
pub use score::{layout_skeleton, visual_score};

use crate::error::Result;
use crate::label::LabelValidator;
use crate::types::{GenerateConfig, ScoredVariant, VariantKind};
use crate::validation_error;

/// Ranked look-alike generator
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GenerateConfig,
    validator: LabelValidator,
}

impl Generator {
    /// Create a generator with default tunables
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom tunables
    pub fn with_config(config: GenerateConfig) -> Self {
        Self {
            config,
            validator: LabelValidator::new(),
        }
    }

    /// Generate, score and rank look-alikes of `label`.
    ///
    /// The label is trimmed and lower-cased first; an empty result or a zero
    /// cap is rejected.
    pub fn generate(&self, label: &str) -> Result<Vec<ScoredVariant>> {
        if self.config.max_variants == 0 {
            return Err(validation_error!("Maximum variant count must be positive"));
        }
        let base = self.validator.validate(label)?;
        if !self.validator.is_ens_safe(&base) {
            tracing::debug!(label = %base, "Label uses characters outside [a-z0-9-]");
        }

        let candidates = self.candidates(&base);
        let unique = rank::dedup(&base, candidates);
        let ranked = rank::rank(&base, unique, self.config.max_variants);

        tracing::debug!(
            label = %base,
            returned = ranked.len(),
            cap = self.config.max_variants,
            "Ranked look-alike variants"
        );

        Ok(ranked)
    }

    /// Raw candidates of every strategy, in evaluation order.
    ///
    /// Generation stops at the candidate ceiling, so later strategies are the
    /// ones cut short on pathologically long labels.
    pub fn candidates(&self, base: &str) -> Vec<Candidate> {
        let ceiling = self.config.candidate_ceiling;
        let mut out = Vec::new();

        for kind in VariantKind::EVALUATION_ORDER {
            let remaining = ceiling.saturating_sub(out.len());
            if remaining == 0 {
                tracing::warn!(
                    label = %base,
                    ceiling,
                    skipped_from = %kind,
                    "Candidate ceiling reached, truncating before scoring"
                );
                break;
            }

            let produced = mutate::mutate(kind, base, self.config.max_per_char, remaining);
            tracing::trace!(kind = %kind, count = produced.len(), "Strategy finished");
            out.extend(
                produced
                    .into_iter()
                    .take(remaining)
                    .map(|variant| Candidate { variant, kind }),
            );
        }

        out
    }
}

/// Ranked look-alikes of `label`, at most `cap` of them
pub fn generate(label: &str, cap: usize) -> Result<Vec<ScoredVariant>> {
    Generator::with_config(GenerateConfig {
        max_variants: cap,
        ..Default::default()
    })
    .generate(label)
}
