pub mod chunker;
pub mod interface;

pub use interface::TranslationModel;

use std::sync::Arc;
use tracing::debug;

use crate::error::ApiError;
use crate::utils::sentence_divider::split_sentences;

/// English-to-French translator. Splits a text at sentence boundaries,
/// packs sentences into token-budget-constrained chunks, and translates the
/// chunks in order through the model capability. Chunks are independent:
/// no context is shared across them, which keeps the model input bounded.
pub struct Translator {
    model: Arc<dyn TranslationModel>,
    max_chunk_tokens: usize,
}

impl Translator {
    pub fn new(model: Arc<dyn TranslationModel>, max_chunk_tokens: usize) -> Self {
        Self {
            model,
            max_chunk_tokens,
        }
    }

    pub async fn translate(&self, text: &str) -> Result<String, ApiError> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Ok(String::new());
        }

        let mut measured = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            let len = self.model.encoded_len(&sentence).await?;
            measured.push((sentence, len));
        }

        let parts = chunker::pack_sentences(&measured, self.max_chunk_tokens);
        debug!("translating {} chunk(s)", parts.len());

        let mut translated = Vec::with_capacity(parts.len());
        for part in &parts {
            translated.push(self.model.translate(part).await?);
        }

        Ok(translated.join(" "))
    }
}
