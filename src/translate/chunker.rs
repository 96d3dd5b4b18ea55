/// Greedily pack consecutive sentences into chunks whose summed encoded
/// token length stays within `budget`. A single sentence longer than the
/// budget becomes its own oversized chunk; it is never split. No empty
/// chunk is ever emitted, and concatenating the chunks in order reproduces
/// the sentence sequence.
pub fn pack_sentences(sentences: &[(String, usize)], budget: usize) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0usize;

    for (sentence, len) in sentences {
        if current_len + len <= budget {
            current.push(sentence);
            current_len += len;
        } else {
            if !current.is_empty() {
                parts.push(current.join(" "));
            }
            current = vec![sentence];
            current_len = *len;
        }
    }

    if !current.is_empty() {
        parts.push(current.join(" "));
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(sentences: &[(&str, usize)]) -> Vec<(String, usize)> {
        sentences
            .iter()
            .map(|(s, n)| (s.to_string(), *n))
            .collect()
    }

    #[test]
    fn packs_up_to_budget() {
        let sentences = measured(&[("a.", 10), ("b.", 10), ("c.", 10)]);
        let parts = pack_sentences(&sentences, 20);
        assert_eq!(parts, vec!["a. b.", "c."]);
    }

    #[test]
    fn oversized_sentence_is_its_own_chunk() {
        let sentences = measured(&[("short.", 5), ("very long sentence.", 200), ("tail.", 5)]);
        let parts = pack_sentences(&sentences, 128);
        assert_eq!(parts, vec!["short.", "very long sentence.", "tail."]);
    }

    #[test]
    fn leading_oversized_sentence_emits_no_empty_chunk() {
        let sentences = measured(&[("huge.", 500), ("small.", 3)]);
        let parts = pack_sentences(&sentences, 128);
        assert_eq!(parts, vec!["huge.", "small."]);
        assert!(parts.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn order_is_preserved_and_nothing_is_lost() {
        let sentences = measured(&[("s1.", 60), ("s2.", 60), ("s3.", 60), ("s4.", 60)]);
        let parts = pack_sentences(&sentences, 128);

        // every chunk within budget (none oversized here)
        assert_eq!(parts, vec!["s1. s2.", "s3. s4."]);

        // concatenation reconstructs the sequence
        let rejoined = parts.join(" ");
        assert_eq!(rejoined, "s1. s2. s3. s4.");
    }

    #[test]
    fn empty_input_gives_no_chunks() {
        assert!(pack_sentences(&[], 128).is_empty());
    }
}
