pub mod grammar;
pub mod render;

use std::sync::Arc;

use crate::error::ApiError;
use crate::tagger::PosTagger;
use crate::types::Language;
use crate::utils::tokenize::{is_punctuation_token, tokenize};

use grammar::{ChunkGrammar, TreeNode};

/// Renders the syntactic chunk tree of an English text as a PNG image.
pub struct TreeRenderer {
    tagger: Arc<dyn PosTagger>,
    grammar: ChunkGrammar,
}

impl TreeRenderer {
    pub fn new(tagger: Arc<dyn PosTagger>) -> Self {
        Self {
            tagger,
            grammar: ChunkGrammar::standard(),
        }
    }

    pub async fn render(&self, text: &str) -> Result<Vec<u8>, ApiError> {
        // Original casing is kept here; only punctuation tokens are dropped.
        let tokens: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|token| !is_punctuation_token(token))
            .collect();

        let tree = if tokens.is_empty() {
            TreeNode::Phrase {
                label: "S".to_string(),
                children: Vec::new(),
            }
        } else {
            let tags = self.tagger.tag(&tokens, Language::English).await?;
            if tags.len() != tokens.len() {
                return Err(ApiError::dependency(
                    "tagger output does not align with input tokens",
                ));
            }
            self.grammar.parse(tokens.into_iter().zip(tags).collect())
        };

        render::render_png(&tree)
    }
}
