//! SVG badge advertising that look-alikes are monitored

use crate::error::{GuardError, Result};
use std::fs;
use std::path::Path;

/// Default badge file name
pub const DEFAULT_BADGE_PATH: &str = "ensguard-badge.svg";

/// Render the badge for an already normalized label
pub fn render(label: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="420" height="48" role="img" aria-label="Look-alike protection">
  <rect width="420" height="48" fill="#0d1117" rx="8"/>
  <text x="16" y="30" font-family="Segoe UI, Inter, Arial" font-size="16" fill="#e6edf3">
    {}.eth look-alike protection by ensguard
  </text>
  <circle cx="395" cy="24" r="6" fill="#3fb950"/>
</svg>"##,
        escape_xml(label)
    )
}

/// Render and write the badge to `path`
pub fn write(label: &str, path: &Path) -> Result<()> {
    fs::write(path, render(label))
        .map_err(|e| GuardError::from(e).with_path(path.display().to_string()))?;
    tracing::info!(label = %label, path = %path.display(), "Badge written");
    Ok(())
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_label() {
        let svg = render("vitalik");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("vitalik.eth look-alike protection by ensguard"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_label_is_escaped() {
        let svg = render("a<b>&\"c\"");
        assert!(svg.contains("a&lt;b&gt;&amp;&quot;c&quot;.eth"));
        assert!(!svg.contains("a<b>"));
    }
}
