// Public API exports
pub mod segmenter;

// Re-export main types for convenience
pub use segmenter::{
    break_offset, classify, segment, segment_with, BreakClass, SegmentPolicy, EMPTY_PLACEHOLDER,
};
