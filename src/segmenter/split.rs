use super::boundary::{break_offset, classify, BreakClass};
use super::config::SegmentPolicy;

/// Split pass: break a chunk longer than `max_chunk_len` into
/// near-equal pieces at the most favorable boundary near each ideal
/// offset.
///
/// The piece count is `max(2, ceil(len / target_piece_len))`. Each
/// internal split targets the ideal size past the previous split and
/// scans a window of ±`search_window` around it, staying `edge_margin`
/// characters away from both ends of the chunk. If the window is empty
/// the split falls back to the exact target offset, so even a chunk
/// with no spaces or punctuation anywhere still terminates.
pub fn split_oversized(chunk: String, policy: &SegmentPolicy) -> Vec<String> {
    let chars: Vec<char> = chunk.chars().collect();
    let len = chars.len();
    if len <= policy.max_chunk_len {
        return vec![chunk];
    }

    let pieces = len.div_ceil(policy.target_piece_len).max(2);
    let ideal = len as f64 / pieces as f64;

    let mut pieces_out = Vec::with_capacity(pieces);
    let mut start = 0usize;

    for _ in 1..pieces {
        let target = start as f64 + ideal;
        let split = best_break(&chars, start, target, policy)
            .unwrap_or_else(|| (target.floor() as usize).min(len));
        push_trimmed(&mut pieces_out, &chars[start..split]);
        start = split;
    }
    push_trimmed(&mut pieces_out, &chars[start..]);

    pieces_out
}

/// Score every index in the window by distance from the ideal offset,
/// reduced by the policy bonus for clause or connective punctuation.
/// The lowest score wins; the first candidate wins ties. The returned
/// offset follows the boundary ownership rule: punctuation stays with
/// the preceding piece, a winning space is excluded from both sides.
fn best_break(chars: &[char], start: usize, target: f64, policy: &SegmentPolicy) -> Option<usize> {
    let lo = ((target - policy.search_window as f64).floor().max(0.0) as usize)
        .max(start + policy.edge_margin);
    let hi = ((target + policy.search_window as f64).ceil() as usize)
        .min(chars.len().saturating_sub(policy.edge_margin));

    let mut best = None;
    let mut best_score = f64::INFINITY;

    for i in lo..hi {
        let class = classify(chars[i]);
        let mut score = (i as f64 - target).abs();
        match class {
            BreakClass::Clause => score -= policy.clause_bonus,
            BreakClass::Connective => score -= policy.connective_bonus,
            _ => {}
        }

        if score < best_score {
            best_score = score;
            best = Some(break_offset(i, class));
        }
    }

    best
}

/// Collect a piece, trimmed; pieces with no non-whitespace content are
/// dropped so the output never contains an empty chunk.
fn push_trimmed(pieces: &mut Vec<String>, piece: &[char]) {
    let text: String = piece.iter().collect();
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        pieces.push(trimmed.to_string());
    }
}
