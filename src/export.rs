//! JSON / CSV / plain-text exporters
//!
//! Exporters write the ranked list verbatim: no re-sorting, no filtering.

use crate::error::{GuardError, Result};
use crate::types::{ScoredVariant, VariantKind};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Column order of the CSV export
pub const CSV_HEADER: [&str; 6] = ["variant", "kind", "distance", "visual_score", "punycode", "note"];

/// Number of variants shown in the console preview
pub const PREVIEW_LEN: usize = 10;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Txt,
}

impl ExportFormat {
    /// Render `variants` in this format
    pub fn render(&self, variants: &[ScoredVariant]) -> Result<String> {
        match self {
            ExportFormat::Json => to_json(variants),
            ExportFormat::Csv => Ok(to_csv(variants)),
            ExportFormat::Txt => Ok(to_txt(variants)),
        }
    }

    /// Write `variants` to `path`
    pub fn write(&self, variants: &[ScoredVariant], path: &Path) -> Result<()> {
        let body = self.render(variants)?;
        fs::write(path, body).map_err(|e| GuardError::from(e).with_path(path.display().to_string()))?;
        tracing::info!(format = %self, path = %path.display(), rows = variants.len(), "Export written");
        Ok(())
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Txt => write!(f, "TXT watchlist"),
        }
    }
}

/// Subset of fields shown on the console
#[derive(Debug, Serialize)]
struct PreviewRow<'a> {
    variant: &'a str,
    kind: VariantKind,
    visual_score: f64,
    distance: usize,
    punycode: &'a str,
}

/// Pretty JSON array of the first [`PREVIEW_LEN`] variants
pub fn preview(variants: &[ScoredVariant]) -> Result<String> {
    let rows: Vec<PreviewRow<'_>> = variants
        .iter()
        .take(PREVIEW_LEN)
        .map(|v| PreviewRow {
            variant: &v.variant,
            kind: v.kind,
            visual_score: v.visual_score,
            distance: v.distance,
            punycode: v.punycode.as_str(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Pretty JSON array of full records, non-ASCII kept as-is
pub fn to_json(variants: &[ScoredVariant]) -> Result<String> {
    Ok(serde_json::to_string_pretty(variants)?)
}

/// CSV with a header row, RFC 4180 quoting
pub fn to_csv(variants: &[ScoredVariant]) -> String {
    let mut out = CSV_HEADER.join(",");
    out.push_str("\r\n");

    for v in variants {
        let row = [
            csv_field(&v.variant),
            v.kind.to_string(),
            v.distance.to_string(),
            format!("{:?}", v.visual_score),
            csv_field(v.punycode.as_str()),
            csv_field(&v.note),
        ];
        out.push_str(&row.join(","));
        out.push_str("\r\n");
    }

    out
}

/// One variant per line
pub fn to_txt(variants: &[ScoredVariant]) -> String {
    variants.iter().map(|v| format!("{}\n", v.variant)).collect()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AsciiEncoding;

    fn sample() -> Vec<ScoredVariant> {
        vec![
            ScoredVariant {
                variant: "\u{0430}pple".to_string(),
                kind: VariantKind::Confusable,
                distance: 1,
                visual_score: 1.0,
                punycode: AsciiEncoding::Valid("xn--pple-43d".to_string()),
                note: "unicode look-alike".to_string(),
            },
            ScoredVariant {
                variant: "aple".to_string(),
                kind: VariantKind::Omission,
                distance: 1,
                visual_score: 0.2,
                punycode: AsciiEncoding::Valid("aple".to_string()),
                note: "omission".to_string(),
            },
            ScoredVariant {
                variant: "-apple".to_string(),
                kind: VariantKind::Neighbor,
                distance: 1,
                visual_score: 0.2,
                punycode: AsciiEncoding::Invalid,
                note: "a \"quoted\", note".to_string(),
            },
        ]
    }

    #[test]
    fn test_csv_layout() {
        let csv = to_csv(&sample());
        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(lines[0], "variant,kind,distance,visual_score,punycode,note");
        assert_eq!(lines[1], "\u{0430}pple,confusable,1,1.0,xn--pple-43d,unicode look-alike");
        assert_eq!(lines[2], "aple,omit,1,0.2,aple,omission");
        assert_eq!(lines[3], "-apple,neighbor,1,0.2,<invalid-idna>,\"a \"\"quoted\"\", note\"");
    }

    #[test]
    fn test_txt_keeps_order() {
        assert_eq!(to_txt(&sample()), "\u{0430}pple\naple\n-apple\n");
    }

    #[test]
    fn test_json_keeps_unicode_and_order() {
        let json = to_json(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["variant"], "\u{0430}pple");
        assert_eq!(parsed[0]["kind"], "confusable");
        assert_eq!(parsed[2]["punycode"], "<invalid-idna>");
        assert!(json.contains('\u{0430}'));
    }

    #[test]
    fn test_preview_fields() {
        let json = preview(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = parsed[0].as_object().unwrap();
        assert_eq!(first.len(), 5);
        assert!(!first.contains_key("note"));
    }

    #[test]
    fn test_write_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watch.txt");
        ExportFormat::Txt.write(&sample(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), to_txt(&sample()));
    }
}
