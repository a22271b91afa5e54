//! IDNA (punycode) rendering of variants

use crate::types::AsciiEncoding;

/// ACE prefix carried by every encoded non-ASCII label
pub const ACE_PREFIX: &str = "xn--";

/// Encode a label with UTS-46 strict STD3 rules.
///
/// "vitalik" stays "vitalik", "v\u{0456}talik" becomes "xn--...". Anything
/// IDNA rejects (empty labels, bad hyphens, over-long labels, disallowed code
/// points) maps to [`AsciiEncoding::Invalid`]. So does any label UTS-46 would
/// silently remap (long s folds to `s`): the encoding must decode back to the
/// exact input.
pub fn to_ascii(label: &str) -> AsciiEncoding {
    if label.is_empty() {
        return AsciiEncoding::Invalid;
    }

    let ascii = match idna::domain_to_ascii_strict(label) {
        Ok(ascii) if !ascii.is_empty() => ascii,
        Ok(_) => return AsciiEncoding::Invalid,
        Err(e) => {
            tracing::trace!(label = %label, error = ?e, "IDNA encoding rejected label");
            return AsciiEncoding::Invalid;
        }
    };

    if !label.is_ascii() && !ascii.split('.').any(|part| part.starts_with(ACE_PREFIX)) {
        tracing::trace!(label = %label, ascii = %ascii, "IDNA mapped label to plain ASCII");
        return AsciiEncoding::Invalid;
    }

    let (decoded, result) = idna::domain_to_unicode(&ascii);
    if result.is_err() || decoded != label {
        tracing::trace!(label = %label, decoded = %decoded, "IDNA encoding is not reversible");
        return AsciiEncoding::Invalid;
    }

    AsciiEncoding::Valid(ascii)
}
