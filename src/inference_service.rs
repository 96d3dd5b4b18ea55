use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::InferenceConfig;
use crate::error::ApiError;
use crate::tagger::PosTagger;
use crate::translate::TranslationModel;
use crate::types::Language;

/// HTTP client for the NLP inference sidecar. Built once at startup and
/// shared across requests; the per-request timeout bounds every model call.
#[derive(Debug, Clone)]
pub struct InferenceServiceClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TagRequest {
    pub tokens: Vec<String>,
    pub language: Language,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TagResponse {
    pub tags: Vec<String>,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EncodeRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EncodeResponse {
    pub num_tokens: usize,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub translated_text: String,
    pub success: bool,
}

impl InferenceServiceClient {
    pub fn new(config: &InferenceConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn tag_tokens(&self, request: TagRequest) -> Result<TagResponse, ApiError> {
        let url = format!("{}/pos/tag", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        let result: TagResponse = response.json().await?;
        if !result.success {
            return Err(ApiError::dependency("tagger reported failure"));
        }
        Ok(result)
    }

    pub async fn encode(&self, request: EncodeRequest) -> Result<EncodeResponse, ApiError> {
        let url = format!("{}/translate/encode", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        let result: EncodeResponse = response.json().await?;
        if !result.success {
            return Err(ApiError::dependency("model tokenizer reported failure"));
        }
        Ok(result)
    }

    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, ApiError> {
        let url = format!("{}/translate/generate", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        let result: GenerateResponse = response.json().await?;
        if !result.success {
            return Err(ApiError::dependency("translation model reported failure"));
        }
        Ok(result)
    }

    pub async fn health_check(&self) -> Result<bool, ApiError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl PosTagger for InferenceServiceClient {
    async fn tag(&self, tokens: &[String], language: Language) -> Result<Vec<String>, ApiError> {
        let response = self
            .tag_tokens(TagRequest {
                tokens: tokens.to_vec(),
                language,
            })
            .await?;
        if response.tags.len() != tokens.len() {
            return Err(ApiError::dependency(format!(
                "tagger returned {} tags for {} tokens",
                response.tags.len(),
                tokens.len()
            )));
        }
        Ok(response.tags)
    }
}

#[async_trait]
impl TranslationModel for InferenceServiceClient {
    async fn encoded_len(&self, text: &str) -> Result<usize, ApiError> {
        let response = self
            .encode(EncodeRequest {
                text: text.to_string(),
            })
            .await?;
        Ok(response.num_tokens)
    }

    async fn translate(&self, text: &str) -> Result<String, ApiError> {
        let response = self
            .generate(GenerateRequest {
                text: text.to_string(),
            })
            .await?;
        Ok(response.translated_text)
    }
}
