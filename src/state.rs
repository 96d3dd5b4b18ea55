use std::sync::Arc;

use crate::annotate::Annotator;
use crate::config::Config;
use crate::inference_service::InferenceServiceClient;
use crate::memory::{MemoryHandle, MemoryStore};
use crate::tagger::PosTagger;
use crate::translate::{TranslationModel, Translator};
use crate::tree::TreeRenderer;

/// Shared application state. Every capability is constructed once at
/// startup and injected into handlers as a read-only handle; concurrent
/// requests never share mutable state outside the memory writer task.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub inference: Arc<InferenceServiceClient>,
    pub annotator: Arc<Annotator>,
    pub translator: Arc<Translator>,
    pub tree_renderer: Arc<TreeRenderer>,
    pub memory: MemoryHandle,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let inference = Arc::new(InferenceServiceClient::new(&config.inference)?);
        let tagger: Arc<dyn PosTagger> = inference.clone();
        let model: Arc<dyn TranslationModel> = inference.clone();
        Self::with_capabilities(config, tagger, model)
    }

    /// Wire the state from explicit capability implementations. Production
    /// goes through `new`; tests inject mocks here.
    pub fn with_capabilities(
        config: Config,
        tagger: Arc<dyn PosTagger>,
        model: Arc<dyn TranslationModel>,
    ) -> anyhow::Result<Self> {
        let inference = Arc::new(InferenceServiceClient::new(&config.inference)?);
        let annotator = Arc::new(Annotator::new(tagger.clone()));
        let translator = Arc::new(Translator::new(model, config.translator.max_chunk_tokens));
        let tree_renderer = Arc::new(TreeRenderer::new(tagger));
        let memory = MemoryStore::spawn(config.memory.path.clone(), translator.clone())?;

        Ok(Self {
            config,
            inference,
            annotator,
            translator,
            tree_renderer,
            memory,
        })
    }
}
