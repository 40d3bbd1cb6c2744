//! Weight-syntax injection.

/// Keywords promoted to weight 1.2.
const IMPORTANT_WORDS: &[&str] = &["masterpiece", "best quality", "highly detailed", "8k"];

/// Keywords promoted to weight 1.1.
const STYLE_WORDS: &[&str] = &["anime", "realistic", "cyberpunk", "fantasy"];

/// A tag counts as already weighted when it starts with `(` and contains
/// `:` anywhere. The check is deliberately lenient: a malformed tag like
/// `(foo:bar` still passes through untouched. Tightening this to a strict
/// pattern would change behavior on malformed input.
fn is_already_weighted(tag: &str) -> bool {
    tag.starts_with('(') && tag.contains(':')
}

/// Inject parenthesized weight annotations into a comma-separated prompt.
///
/// Important keywords get `(tag:1.2)`, style keywords `(tag:1.1)`, and
/// everything else passes through unchanged. Already-weighted tags are
/// left alone, which makes the whole transform idempotent.
pub fn add_weights(prompt: &str) -> String {
    if prompt.trim().is_empty() {
        return String::new();
    }

    super::split_tags(prompt)
        .map(|tag| {
            if is_already_weighted(tag) {
                return tag.to_string();
            }
            let lower = tag.to_lowercase();
            if IMPORTANT_WORDS.iter().any(|word| lower.contains(word)) {
                format!("({tag}:1.2)")
            } else if STYLE_WORDS.iter().any(|word| lower.contains(word)) {
                format!("({tag}:1.1)")
            } else {
                tag.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
