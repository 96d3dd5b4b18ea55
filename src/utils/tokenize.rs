use unicode_segmentation::UnicodeSegmentation;

// ASCII punctuation plus the curly quotes the analyzer must drop.
const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Split text into word-level tokens. Punctuation marks come out as their
/// own tokens; whitespace is discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| segment.to_string())
        .collect()
}

/// True for a single-character punctuation token (including curly quotes).
/// Multi-character tokens are never treated as punctuation, so something
/// like `...` survives filtering and gets tagged.
pub fn is_punctuation_token(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => ASCII_PUNCTUATION.contains(c) || c == '“' || c == '”',
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_and_punctuation() {
        let tokens = tokenize("i love cats.");
        assert_eq!(tokens, vec!["i", "love", "cats", "."]);
    }

    #[test]
    fn keeps_curly_quotes_as_tokens() {
        let tokens = tokenize("“hello” world");
        assert_eq!(tokens, vec!["“", "hello", "”", "world"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }

    #[test]
    fn punctuation_detection() {
        assert!(is_punctuation_token("."));
        assert!(is_punctuation_token(","));
        assert!(is_punctuation_token("“"));
        assert!(is_punctuation_token("”"));
        assert!(!is_punctuation_token("cats"));
        assert!(!is_punctuation_token("..."));
        assert!(!is_punctuation_token(""));
    }
}
