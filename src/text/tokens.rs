//! Heuristic token estimation.
//!
//! A rough estimate for UI display, not a tokenizer. Different models
//! (BERT, GPT, Claude) split text differently; the weights below are
//! averages that track real counts closely enough for a meter widget.

/// Punctuation characters that add fractional tokens inside a word.
const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'',
];

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Estimate the token count of a prompt.
///
/// CJK ideographs weigh 1.5 tokens each. The remaining text is split on
/// whitespace; words longer than six characters weigh 1.5, shorter ones
/// 1.1, plus 0.5 per punctuation character. The sum is rounded up.
/// Deterministic, and monotonic: appending text never lowers the estimate.
pub fn estimate_tokens(text: &str) -> u32 {
    if text.trim().is_empty() {
        return 0;
    }

    let cjk_count = text.chars().filter(|c| is_cjk(*c)).count();
    let mut total = cjk_count as f64 * 1.5;

    let latin: String = text
        .chars()
        .map(|c| if is_cjk(c) { ' ' } else { c })
        .collect();

    for word in latin.split_whitespace() {
        let len = word.chars().count();
        total += if len > 6 { 1.5 } else { 1.1 };
        let punct = word.chars().filter(|c| PUNCTUATION.contains(c)).count();
        total += punct as f64 * 0.5;
    }

    total.ceil() as u32
}
