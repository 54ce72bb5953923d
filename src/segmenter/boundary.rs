/// Classification of a character as a potential break point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakClass {
    /// Sentence-terminal delimiter: `.`, `!`, `?`, or newline
    Terminal,
    /// Clause punctuation: `,` or `;`
    Clause,
    /// Connective punctuation: `-`, `—`, or `:`
    Connective,
    /// A plain space
    Space,
    /// Any other character
    Other,
}

/// Classify a single character for break-point purposes
pub fn classify(c: char) -> BreakClass {
    match c {
        '.' | '!' | '?' | '\n' => BreakClass::Terminal,
        ',' | ';' => BreakClass::Clause,
        '-' | '—' | ':' => BreakClass::Connective,
        ' ' => BreakClass::Space,
        _ => BreakClass::Other,
    }
}

/// Boundary ownership rule, shared by the tokenizer and the split pass:
/// a break at `idx` lands after the character there, so delimiters and
/// punctuation stay with the preceding text. A space is the exception —
/// the break lands on it and the space belongs to neither side.
pub fn break_offset(idx: usize, class: BreakClass) -> usize {
    if class == BreakClass::Space {
        idx
    } else {
        idx + 1
    }
}
