mod boundary;
mod config;
mod merge;
mod split;
mod tokenizer;


pub use boundary::{break_offset, classify, BreakClass};
pub use config::SegmentPolicy;
pub use merge::merge_short;
pub use split::split_oversized;
pub use tokenizer::tokenize;

/// Placeholder chunk returned when the input has no readable content
pub const EMPTY_PLACEHOLDER: &str = "No content to read.";

/// Segment raw post text into balanced display chunks using the default
/// policy. See [`segment_with`].
pub fn segment(text: &str) -> Vec<String> {
    segment_with(text, &SegmentPolicy::default())
}

/// Segment raw post text into balanced display chunks.
///
/// Rules:
/// - Tokenize on sentence delimiters (`.`, `!`, `?`, newline), keeping
///   the delimiters with their sentence
/// - Merge fragments shorter than `min_chunk_len` into a neighbor so no
///   chunk renders as a one-line orphan
/// - Split chunks longer than `max_chunk_len` into roughly equal pieces
///   at a nearby space or punctuation boundary
///
/// Total over all inputs: empty or whitespace-only text yields the
/// placeholder chunk, never an empty sequence. Deterministic, so chunk
/// indices are stable across repeated calls on the same input — callers
/// may key per-chunk state (like status, animation progress) by index.
pub fn segment_with(text: &str, policy: &SegmentPolicy) -> Vec<String> {
    if text.is_empty() {
        return vec![EMPTY_PLACEHOLDER.to_string()];
    }

    let tokens = tokenize(text);
    let merged = merge_short(&tokens, policy);
    if merged.is_empty() {
        // Whitespace-only input: every token trimmed away
        return vec![EMPTY_PLACEHOLDER.to_string()];
    }

    merged
        .into_iter()
        .flat_map(|chunk| split_oversized(chunk, policy))
        .collect()
}
