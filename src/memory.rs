use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use regex::Regex;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::translate::Translator;
use crate::utils::tokenize::is_punctuation_token;

/// The memory task is gone; nothing was recorded for this request.
#[derive(Debug, Error)]
#[error("translation memory is unavailable")]
pub struct MemoryUnavailable;

/// Cheap handle the request path holds. `record` only enqueues; all file
/// and model work happens on the single writer task, so a slow or failing
/// memory update can never delay or fail a response.
#[derive(Clone)]
pub struct MemoryHandle {
    tx: mpsc::UnboundedSender<String>,
}

impl MemoryHandle {
    pub fn record(&self, text: String) -> Result<(), MemoryUnavailable> {
        self.tx.send(text).map_err(|_| MemoryUnavailable)
    }
}

/// Persisted word-to-translation map. Owned by exactly one task: messages
/// are processed sequentially, so there is no read-modify-write race on the
/// file. The map only ever grows.
pub struct MemoryStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    translator: Arc<Translator>,
    stopwords: HashSet<String>,
    edge_strip: Regex,
}

impl MemoryStore {
    /// Load the store from `path`, creating an empty file if none exists.
    pub fn load(path: impl Into<PathBuf>, translator: Arc<Translator>) -> Result<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading translation memory {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing translation memory {}", path.display()))?
        } else {
            let empty = BTreeMap::new();
            write_entries(&path, &empty)?;
            empty
        };

        // The memory filter always uses the service's combined stopword set,
        // regardless of the language of the request that fed it.
        let mut stopwords: HashSet<String> =
            stop_words::get(stop_words::LANGUAGE::English).into_iter().collect();
        stopwords.extend(stop_words::get(stop_words::LANGUAGE::French));

        Ok(Self {
            path,
            entries,
            translator,
            stopwords,
            edge_strip: Regex::new(r"(^\W+|\W+$)").expect("edge strip pattern is valid"),
        })
    }

    /// Spawn the writer task and return its handle.
    pub fn spawn(path: impl Into<PathBuf>, translator: Arc<Translator>) -> Result<MemoryHandle> {
        let mut store = Self::load(path, translator)?;
        info!(
            "translation memory ready: {} entries at {}",
            store.entries.len(),
            store.path.display()
        );

        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        tokio::spawn(async move {
            while let Some(text) = rx.recv().await {
                if let Err(err) = store.record_text(&text).await {
                    warn!("translation memory update failed: {err:#}");
                }
            }
        });

        Ok(MemoryHandle { tx })
    }

    /// Translate and insert every new word of `text`; persist only when
    /// something was added, so re-recording the same text is a no-op.
    /// Returns the number of words added.
    pub async fn record_text(&mut self, text: &str) -> Result<usize> {
        let mut added = 0;
        for word in self.candidate_words(text) {
            if self.entries.contains_key(&word) {
                continue;
            }
            match self.translator.translate(&word).await {
                Ok(translated) => {
                    self.entries.insert(word, translated);
                    added += 1;
                }
                Err(err) => {
                    // degraded: skip this word, keep the rest of the batch
                    warn!("skipping memory entry for {word:?}: {err}");
                }
            }
        }

        if added > 0 {
            write_entries(&self.path, &self.entries)?;
            debug!("translation memory grew by {added} entries");
        }
        Ok(added)
    }

    /// Whitespace tokens, deduplicated, with stopwords and punctuation
    /// filtered out and leading/trailing non-word characters stripped.
    /// Keys stay case-sensitive surface forms.
    fn candidate_words(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut words = Vec::new();

        for raw in text.split_whitespace() {
            if !seen.insert(raw) {
                continue;
            }
            let lowered = raw.to_lowercase();
            if self.stopwords.contains(&lowered) || is_punctuation_token(&lowered) {
                continue;
            }
            let word = self.edge_strip.replace_all(raw, "").to_string();
            if word.is_empty() {
                continue;
            }
            words.push(word);
        }

        words
    }

    #[cfg(test)]
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<()> {
    let content = serde_json::to_string_pretty(entries)?;
    fs::write(path, content)
        .with_context(|| format!("writing translation memory {}", path.display()))?;
    Ok(())
}
