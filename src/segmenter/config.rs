use serde::{Deserialize, Serialize};

/// Tunable thresholds for the merge and split passes.
///
/// Defaults follow the reader's one-chunk-per-screen model: chunks land
/// between roughly 80 and 220 characters, aiming for ~140 per piece when
/// an oversized chunk has to be cut. All lengths are `char` counts.
///
/// Unknown or missing fields in a policy file fall back to these defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentPolicy {
    /// Chunks shorter than this are absorbed into a neighbor
    pub min_chunk_len: usize,
    /// Chunks longer than this are split into near-equal pieces
    pub max_chunk_len: usize,
    /// Preferred length of a piece produced by the split pass
    pub target_piece_len: usize,
    /// Half-width of the scan window around an ideal split offset
    pub search_window: usize,
    /// Minimum distance a split may land from either end of a chunk
    pub edge_margin: usize,
    /// Score reduction for breaking at `,` or `;`
    pub clause_bonus: f64,
    /// Score reduction for breaking at `-`, `—`, or `:`
    pub connective_bonus: f64,
}

impl Default for SegmentPolicy {
    fn default() -> Self {
        Self {
            min_chunk_len: 80,
            max_chunk_len: 220,
            target_piece_len: 140,
            search_window: 50,
            edge_margin: 20,
            clause_bonus: 25.0,
            connective_bonus: 20.0,
        }
    }
}
