use async_trait::async_trait;

use crate::error::ApiError;

/// Pretrained sequence-to-sequence translation capability - the Marian
/// en-fr model behind the inference service. `encoded_len` exposes the
/// model tokenizer so chunk packing can respect the input-length limit.
#[async_trait]
pub trait TranslationModel: Send + Sync {
    async fn encoded_len(&self, text: &str) -> Result<usize, ApiError>;
    async fn translate(&self, text: &str) -> Result<String, ApiError>;
}
