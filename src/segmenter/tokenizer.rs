use super::boundary::{break_offset, classify, BreakClass};

/// Split raw text into sentence-like tokens.
///
/// A token is a maximal run of non-terminal characters followed by its
/// full run of terminal delimiters — the delimiters stay attached to the
/// token. Trailing text with no delimiter becomes the final token.
/// Terminal delimiters with no preceding text to attach to are skipped.
///
/// Tokens are returned untrimmed; the merge pass trims them and drops
/// the ones with no non-whitespace content. If nothing matches at all
/// (delimiter-only input), the whole input is returned as one token.
pub fn tokenize(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut matched = false;
    let mut i = 0;

    while i < chars.len() {
        // Orphan delimiters before any token body attach to nothing
        if classify(chars[i]) == BreakClass::Terminal {
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && classify(chars[i]) != BreakClass::Terminal {
            i += 1;
        }
        while i < chars.len() && classify(chars[i]) == BreakClass::Terminal {
            i = break_offset(i, BreakClass::Terminal);
        }

        matched = true;
        tokens.push(chars[start..i].iter().collect());
    }

    if !matched && !text.is_empty() {
        tokens.push(text.to_string());
    }

    tokens
}
