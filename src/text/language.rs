//! Lightweight language detection for the translation flow.

/// Outcome of the heuristic language check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedLanguage {
    Chinese,
    English,
    Unknown,
}

/// Detect whether a prompt is Chinese or English.
///
/// Any CJK ideograph marks the text as Chinese; otherwise any ASCII letter
/// marks it as English. Good enough to pick a translation direction.
pub fn detect_language(text: &str) -> DetectedLanguage {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return DetectedLanguage::Unknown;
    }
    if trimmed
        .chars()
        .any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
    {
        return DetectedLanguage::Chinese;
    }
    if trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
        return DetectedLanguage::English;
    }
    DetectedLanguage::Unknown
}
