use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of word characters. Digits and underscores count as word
/// characters; `\w` and `\b` are Unicode-aware.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Lower-case `text` and return its word tokens, left to right.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of whitespace-delimited segments, not punctuation-aware.
///
/// The information separators U+001C..=U+001F also delimit segments, on top
/// of Unicode `White_Space`.
pub fn whitespace_word_count(text: &str) -> usize {
    text.split(is_segment_separator)
        .filter(|segment| !segment.is_empty())
        .count()
}

fn is_segment_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
