//! Prompt text utilities.
//!
//! Pure, deterministic string transforms used by UI-layer callers. None of
//! these touch the network pipeline.

mod language;
mod organize;
mod tokens;
mod weights;

pub use language::{DetectedLanguage, detect_language};
pub use organize::reorganize;
pub use tokens::estimate_tokens;
pub use weights::add_weights;

/// Full optimization pass: reorganize, then inject weight syntax.
///
/// The order is fixed; reorganization runs first so weight detection sees
/// stable tag boundaries.
pub fn optimize(prompt: &str) -> String {
    add_weights(&reorganize(prompt))
}

/// Split a prompt into trimmed, non-empty comma-separated tags.
pub(crate) fn split_tags(prompt: &str) -> impl Iterator<Item = &str> {
    prompt
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimize_composes_reorganize_then_weights() {
        let prompt = "cat ears, masterpiece";
        assert_eq!(optimize(prompt), add_weights(&reorganize(prompt)));
        // masterpiece is a quality word, so it sorts first and gains weight
        assert_eq!(optimize(prompt), "(masterpiece:1.2), cat ears");
    }

    #[test]
    fn optimize_is_idempotent() {
        let once = optimize("anime, girl, best quality, soft light");
        assert_eq!(optimize(&once), once);
    }
}
