use super::config::SegmentPolicy;

/// Merge pass: absorb tokens shorter than `min_chunk_len` into a
/// neighbor so no chunk renders as a one-line orphan.
///
/// Rules:
/// - Tokens that trim to nothing are dropped.
/// - A short token is held in a buffer and prepended (space-joined) to
///   the next token, unless it is the last token in the raw stream.
/// - A buffer left over at the end is appended to the last emitted
///   chunk, or emitted alone if nothing was emitted yet.
///
/// Only the last chunk of the result may end up below `min_chunk_len`,
/// since it has no later neighbor to absorb into.
pub fn merge_short(tokens: &[String], policy: &SegmentPolicy) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    let mut buffer = String::new();

    for (i, token) in tokens.iter().enumerate() {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            continue;
        }

        let candidate = if buffer.is_empty() {
            trimmed.to_string()
        } else {
            let joined = format!("{} {}", buffer, trimmed);
            buffer.clear();
            joined
        };

        if candidate.chars().count() < policy.min_chunk_len && i < tokens.len() - 1 {
            buffer = candidate;
        } else {
            merged.push(candidate);
        }
    }

    if !buffer.is_empty() {
        match merged.last_mut() {
            Some(last) => {
                last.push(' ');
                last.push_str(&buffer);
            }
            None => merged.push(buffer),
        }
    }

    merged
}
