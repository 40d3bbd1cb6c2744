//! Tag classification and reordering.

/// Quality descriptors, checked first.
const QUALITY_WORDS: &[&str] = &[
    "masterpiece",
    "best quality",
    "ultra high resolution",
    "8k",
    "4k",
    "highly detailed",
    "ultra-detailed",
    "photorealistic",
    "professional",
    "high quality",
    "insanely detailed",
];

const SUBJECT_WORDS: &[&str] = &[
    "girl", "woman", "man", "boy", "person", "character", "portrait", "full body",
];

const STYLE_WORDS: &[&str] = &[
    "anime",
    "realistic",
    "oil painting",
    "watercolor",
    "digital art",
    "concept art",
    "cyberpunk",
    "steampunk",
    "fantasy",
    "sci-fi",
    "gothic",
    "vaporwave",
    "pixel art",
];

/// Tags longer than this land in the long-detail bucket when nothing
/// else matched.
const LONG_TAG_LEN: usize = 10;

fn matches_any(tag_lower: &str, words: &[&str]) -> bool {
    words.iter().any(|word| tag_lower.contains(word))
}

/// Reorganize a comma-separated prompt into bucketed order.
///
/// Tags are trimmed, deduplicated (case-sensitive, first occurrence wins),
/// then each is classified by the first case-insensitive substring hit in
/// priority order: quality, subject, style, lighting, composition, long
/// tag, other. Output concatenates the buckets as
/// {quality, subject, long-detail, style, lighting, composition, other}.
///
/// Classification depends only on tag content, so the operation is
/// idempotent.
pub fn reorganize(prompt: &str) -> String {
    if prompt.trim().is_empty() {
        return String::new();
    }

    let mut seen: Vec<&str> = Vec::new();
    for tag in super::split_tags(prompt) {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }

    let mut quality = Vec::new();
    let mut subjects = Vec::new();
    let mut details = Vec::new();
    let mut styles = Vec::new();
    let mut lighting = Vec::new();
    let mut composition = Vec::new();
    let mut others = Vec::new();

    for tag in seen {
        let lower = tag.to_lowercase();
        if matches_any(&lower, QUALITY_WORDS) {
            quality.push(tag);
        } else if matches_any(&lower, SUBJECT_WORDS) {
            subjects.push(tag);
        } else if matches_any(&lower, STYLE_WORDS) {
            styles.push(tag);
        } else if lower.contains("light") || lower.contains("shadow") || lower.contains("glow") {
            lighting.push(tag);
        } else if lower.contains("shot") || lower.contains("angle") || lower.contains("view") {
            composition.push(tag);
        } else if tag.chars().count() > LONG_TAG_LEN {
            details.push(tag);
        } else {
            others.push(tag);
        }
    }

    [quality, subjects, details, styles, lighting, composition, others]
        .concat()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(reorganize(""), "");
        assert_eq!(reorganize("  , ,  "), "");
    }

    #[test]
    fn duplicates_are_dropped_first_occurrence_wins() {
        assert_eq!(reorganize("best quality, girl, best quality"), "best quality, girl");
    }

    #[test]
    fn dedup_is_case_sensitive() {
        // "Girl" and "girl" are distinct tags; both classify as subject.
        assert_eq!(reorganize("Girl, girl"), "Girl, girl");
    }

    #[test]
    fn buckets_concatenate_in_fixed_order() {
        let prompt = "low angle shot, soft light, anime, a very long detailed tag, girl, masterpiece, blue";
        assert_eq!(
            reorganize(prompt),
            "masterpiece, girl, a very long detailed tag, anime, soft light, low angle shot, blue"
        );
    }

    #[test]
    fn first_matching_bucket_claims_the_tag() {
        // "photorealistic" contains "realistic" (style) but quality wins.
        assert_eq!(reorganize("photorealistic"), "photorealistic");
        let out = reorganize("photorealistic, anime");
        assert_eq!(out, "photorealistic, anime");
    }

    #[test]
    fn unmatched_short_tag_passes_through_to_other() {
        assert_eq!(reorganize("blue"), "blue");
    }

    #[test]
    fn long_unmatched_tag_lands_in_detail_bucket() {
        // 11+ chars with no keyword hit sorts before style tags.
        assert_eq!(
            reorganize("anime, flowing hair"),
            "flowing hair, anime"
        );
    }

    #[test]
    fn reorganize_is_idempotent() {
        let prompts = [
            "best quality, girl, anime, soft light, wide shot, something quite long, x",
            "8k, cyberpunk, glow, dutch angle, woman",
            "single",
        ];
        for prompt in prompts {
            let once = reorganize(prompt);
            assert_eq!(reorganize(&once), once, "not idempotent for {prompt:?}");
        }
    }
}
