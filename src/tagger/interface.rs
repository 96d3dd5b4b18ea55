use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::Language;

/// Part-of-speech tagging capability - actual model lives in the inference
/// service. English tokens come back with Penn Treebank tags, French tokens
/// with coarse UPOS classes, aligned with the input order.
#[async_trait]
pub trait PosTagger: Send + Sync {
    async fn tag(&self, tokens: &[String], language: Language) -> Result<Vec<String>, ApiError>;
}
