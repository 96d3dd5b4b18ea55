use serde::{Deserialize, Serialize};

/// Languages the service can analyze. English is the source side of the
/// translation pair, French the target side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    French,
}

/// One analyzed word: its surface form, how often it occurs in the
/// lowercased token stream, and a human-readable grammatical label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordInfo {
    pub word: String,
    pub freq: u64,
    pub gram_info: String,
}

/// Analysis of a whole text. `words_info` is sorted by descending frequency
/// and contains each surviving word exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextInfo {
    pub words_info: Vec<WordInfo>,
    pub words_count: usize,
}

impl TextInfo {
    pub fn empty() -> Self {
        Self {
            words_info: Vec::new(),
            words_count: 0,
        }
    }
}

/// Request body shared by both endpoints. An empty `text` is valid and
/// yields the empty analysis downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// Response body of `POST /translation`. `warning` is only present when the
/// translation-memory update could not be enqueued; the translation itself
/// is still complete in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub original_text: String,
    pub original_text_analysis: TextInfo,
    pub translated_text: String,
    pub translated_text_analysis: TextInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
