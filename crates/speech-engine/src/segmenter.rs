//! Sentence segmentation
//!
//! Sentences are the unit of speech playback. Boundaries are runs of
//! terminal punctuation (Latin and full-width CJK) or newlines; the
//! punctuation itself is not kept.

/// Characters that end a sentence
const BOUNDARY_CHARS: &[char] = &['.', '!', '?', '。', '！', '？', '\n'];

/// Splits text into trimmed, non-empty sentences in source order.
/// Consecutive boundary characters count as a single break. Empty input
/// yields an empty sequence.
pub fn segment(text: &str) -> Vec<String> {
    text.split(|c| BOUNDARY_CHARS.contains(&c))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
