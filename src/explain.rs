//! Human-readable explanation of the scoring model

use crate::label::LabelValidator;
use crate::types::VariantKind;
use serde_json::{json, Map, Value};

/// Explanation document for a normalized label
pub fn explain(label: &str) -> Value {
    let kinds: Map<String, Value> = VariantKind::EVALUATION_ORDER
        .iter()
        .map(|k| (k.to_string(), Value::from(k.description())))
        .collect();

    json!({
        "label": label,
        "ens_safe": LabelValidator::new().is_ens_safe(label),
        "scoring": {
            "visual_score": "0..1, higher is more confusable (same length + confusables + edit distance ≤1).",
            "distance": "Levenshtein distance to the base label.",
            "kinds": kinds
        },
        "advice": [
            "Register the top 3–10 variants with the highest visual_score if they matter to your brand.",
            "Publish a watchlist (TXT/CSV) and alert on any resolution or listings matching it.",
            "Consider using an ENS contenthash to point variants to a warning page."
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_lists_every_kind() {
        let doc = explain("vitalik");
        assert_eq!(doc["label"], "vitalik");
        let kinds = doc["scoring"]["kinds"].as_object().unwrap();
        for key in ["confusable", "neighbor", "omit", "dup", "swap"] {
            assert!(kinds.contains_key(key), "missing {}", key);
        }
        assert_eq!(doc["advice"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_explain_flags_charset() {
        assert_eq!(explain("my-dao42")["ens_safe"], true);
        assert_eq!(explain("\u{0430}pple")["ens_safe"], false);
        assert_eq!(explain("vit_alik")["ens_safe"], false);
    }
}
