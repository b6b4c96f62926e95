//! Partial redaction of secret values for console display.

use crate::constants::display;

/// Which masking thresholds to apply.
///
/// Upload confirmations and instruction previews use different rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskStyle {
    /// Over 14 chars: first 6, `...`, last 4. Otherwise first 4 and `...`.
    Upload,
    /// Over 16 chars: first 8, `...`, last 4. Otherwise first 4 and `...`.
    Preview,
}

impl MaskStyle {
    fn threshold_and_head(self) -> (usize, usize) {
        match self {
            MaskStyle::Upload => (display::UPLOAD_MASK_THRESHOLD, display::UPLOAD_MASK_HEAD),
            MaskStyle::Preview => (display::PREVIEW_MASK_THRESHOLD, display::PREVIEW_MASK_HEAD),
        }
    }
}

/// Mask `value` for display.
pub fn mask(value: &str, style: MaskStyle) -> String {
    let chars: Vec<char> = value.chars().collect();
    let (threshold, head) = style.threshold_and_head();

    if chars.len() > threshold {
        let start: String = chars[..head].iter().collect();
        let end: String = chars[chars.len() - display::MASK_TAIL..].iter().collect();
        format!("{}...{}", start, end)
    } else {
        let start: String = chars.iter().take(display::SHORT_MASK_HEAD).collect();
        format!("{}...", start)
    }
}
