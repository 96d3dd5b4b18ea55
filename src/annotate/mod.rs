pub mod labels;

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::ApiError;
use crate::tagger::PosTagger;
use crate::types::{Language, TextInfo, WordInfo};
use crate::utils::tokenize::{is_punctuation_token, tokenize};

/// Lexical annotator: tokenizes a text, drops stopwords and punctuation,
/// and reports each remaining unique word with its frequency and a
/// grammatical label resolved through the tagger capability.
pub struct Annotator {
    tagger: Arc<dyn PosTagger>,
    english_stopwords: HashSet<String>,
    french_stopwords: HashSet<String>,
}

impl Annotator {
    pub fn new(tagger: Arc<dyn PosTagger>) -> Self {
        Self {
            tagger,
            english_stopwords: stopword_set(stop_words::LANGUAGE::English),
            french_stopwords: stopword_set(stop_words::LANGUAGE::French),
        }
    }

    pub async fn annotate(&self, text: &str, language: Language) -> Result<TextInfo, ApiError> {
        let tokens = tokenize(&text.to_lowercase());
        if tokens.is_empty() {
            return Ok(TextInfo::empty());
        }

        let stopwords = match language {
            Language::English => &self.english_stopwords,
            Language::French => &self.french_stopwords,
        };

        // Unique tokens in first-seen order; frequency is counted against
        // the full (non-deduplicated) token stream below.
        let mut seen = HashSet::new();
        let candidates: Vec<String> = tokens
            .iter()
            .filter(|token| seen.insert(token.as_str()))
            .filter(|token| !stopwords.contains(token.as_str()) && !is_punctuation_token(token))
            .cloned()
            .collect();

        if candidates.is_empty() {
            return Ok(TextInfo::empty());
        }

        let tags = self.tagger.tag(&candidates, language).await?;
        if tags.len() != candidates.len() {
            return Err(ApiError::dependency(
                "tagger output does not align with input tokens",
            ));
        }

        let mut words_info: Vec<WordInfo> = candidates
            .into_iter()
            .zip(tags)
            .map(|(word, tag)| {
                let gram_info = match language {
                    Language::English => labels::english_label(&tag),
                    Language::French => labels::french_label(&tag),
                };
                let freq = tokens.iter().filter(|t| **t == word).count() as u64;
                WordInfo {
                    word,
                    freq,
                    gram_info: gram_info.to_string(),
                }
            })
            .collect();

        words_info.sort_by(|a, b| b.freq.cmp(&a.freq));

        Ok(TextInfo {
            words_count: words_info.len(),
            words_info,
        })
    }
}

fn stopword_set(language: stop_words::LANGUAGE) -> HashSet<String> {
    stop_words::get(language).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct MapTagger {
        tags: HashMap<&'static str, &'static str>,
        fallback: &'static str,
    }

    #[async_trait]
    impl PosTagger for MapTagger {
        async fn tag(
            &self,
            tokens: &[String],
            _language: Language,
        ) -> Result<Vec<String>, ApiError> {
            Ok(tokens
                .iter()
                .map(|t| {
                    self.tags
                        .get(t.as_str())
                        .copied()
                        .unwrap_or(self.fallback)
                        .to_string()
                })
                .collect())
        }
    }

    fn english_tagger() -> Arc<dyn PosTagger> {
        Arc::new(MapTagger {
            tags: HashMap::from([("love", "VBP"), ("cats", "NNS"), ("cat", "NN"), ("saw", "VBD")]),
            fallback: "NN",
        })
    }

    #[tokio::test]
    async fn i_love_cats_scenario() {
        let annotator = Annotator::new(english_tagger());
        let info = annotator.annotate("I love cats.", Language::English).await.unwrap();

        assert_eq!(info.words_count, 2);
        assert_eq!(info.words_count, info.words_info.len());
        let words: Vec<&str> = info.words_info.iter().map(|w| w.word.as_str()).collect();
        assert!(words.contains(&"love"));
        assert!(words.contains(&"cats"));
        assert!(info.words_info.iter().all(|w| w.freq == 1));
    }

    #[tokio::test]
    async fn frequency_counts_raw_token_stream() {
        let annotator = Annotator::new(english_tagger());
        let info = annotator
            .annotate("The cat saw the cat. The cat ran.", Language::English)
            .await
            .unwrap();

        let cat = info.words_info.iter().find(|w| w.word == "cat").unwrap();
        assert_eq!(cat.freq, 3);
        let saw = info.words_info.iter().find(|w| w.word == "saw").unwrap();
        assert_eq!(saw.freq, 1);

        // sorted by descending frequency
        for pair in info.words_info.windows(2) {
            assert!(pair[0].freq >= pair[1].freq);
        }

        // words are unique within one analysis
        let mut unique = HashSet::new();
        assert!(info.words_info.iter().all(|w| unique.insert(&w.word)));

        // frequency sum never exceeds the token count
        let total_tokens = tokenize("the cat saw the cat. the cat ran.").len() as u64;
        let freq_sum: u64 = info.words_info.iter().map(|w| w.freq).sum();
        assert!(freq_sum <= total_tokens);
    }

    #[tokio::test]
    async fn empty_text_is_zero_words_zero_count() {
        let annotator = Annotator::new(english_tagger());
        let info = annotator.annotate("", Language::English).await.unwrap();
        assert_eq!(info.words_count, 0);
        assert!(info.words_info.is_empty());
    }

    #[tokio::test]
    async fn unknown_english_tag_gets_explicit_label() {
        let annotator = Annotator::new(Arc::new(MapTagger {
            tags: HashMap::new(),
            fallback: "ZZZ",
        }));
        let info = annotator.annotate("blorp", Language::English).await.unwrap();
        assert_eq!(info.words_info[0].gram_info, labels::UNKNOWN_ENGLISH_LABEL);
    }

    #[tokio::test]
    async fn unknown_french_class_is_included_with_empty_label() {
        let annotator = Annotator::new(Arc::new(MapTagger {
            tags: HashMap::from([("chat", "NOUN")]),
            fallback: "MYSTERY",
        }));
        let info = annotator
            .annotate("chat inconnu", Language::French)
            .await
            .unwrap();

        assert_eq!(info.words_count, 2);
        let chat = info.words_info.iter().find(|w| w.word == "chat").unwrap();
        assert_eq!(chat.gram_info, "существительное");
        let inconnu = info.words_info.iter().find(|w| w.word == "inconnu").unwrap();
        assert_eq!(inconnu.gram_info, "");
    }
}
