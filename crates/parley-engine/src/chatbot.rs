//! The conversational engine handed to request handlers.

use parley_core::config::ParleyConfig;
use parley_core::types::Reply;
use tracing::debug;

use crate::error::EngineError;
use crate::matching::BestMatch;
use crate::preprocess::clean_whitespace;
use crate::store::StatementStore;

/// Anything that can answer an utterance.
///
/// Handlers depend on this trait rather than on [`ChatBot`] so tests can
/// inject a scripted engine.
pub trait ConversationalEngine: Send + Sync {
    /// Best reply to `text`.
    fn get_response(&self, text: &str) -> Result<Reply, EngineError>;

    /// Number of statements the engine knows.
    fn statement_count(&self) -> Result<usize, EngineError>;

    fn is_trained(&self) -> bool {
        self.statement_count().map(|n| n > 0).unwrap_or(false)
    }
}

/// Statement store plus a best-match logic adapter.
#[derive(Debug)]
pub struct ChatBot {
    name: String,
    store: StatementStore,
    adapter: BestMatch,
}

impl ChatBot {
    pub fn new(name: impl Into<String>, adapter: BestMatch) -> Self {
        Self {
            name: name.into(),
            store: StatementStore::new(),
            adapter,
        }
    }

    /// Untrained bot built from the `[general]` and `[engine]` sections.
    pub fn from_config(config: &ParleyConfig) -> Self {
        Self::new(
            config.general.bot_name.clone(),
            BestMatch::from_config(&config.engine),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Storage the trainers write into.
    pub fn storage(&self) -> &StatementStore {
        &self.store
    }
}

impl ConversationalEngine for ChatBot {
    fn get_response(&self, text: &str) -> Result<Reply, EngineError> {
        let input = clean_whitespace(text);
        if input.is_empty() {
            return Err(EngineError::EmptyInput);
        }
        if self.store.count()? == 0 {
            return Err(EngineError::NotTrained);
        }

        let reply = self.adapter.process(&input, &self.store)?;
        debug!(
            bot = %self.name,
            confidence = reply.confidence,
            default = reply.is_default(),
            "Response generated"
        );
        Ok(reply)
    }

    fn statement_count(&self) -> Result<usize, EngineError> {
        self.store.count()
    }
}
