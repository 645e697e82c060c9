//! One-shot engine construction and training at process start.

use std::time::{Duration, Instant};

use parley_core::config::ParleyConfig;
use parley_core::error::{ParleyError, Result};
use tracing::info;

use crate::chatbot::{ChatBot, ConversationalEngine};
use crate::corpus::{self, Corpus};
use crate::trainer::CorpusTrainer;

/// Summary of the startup training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub conversations: usize,
    pub statements: usize,
    /// Categories of every corpus trained, in training order.
    pub categories: Vec<String>,
    pub elapsed: Duration,
}

/// Build a bot from `config` and train it from every configured corpus.
///
/// Blocks until training finishes. Any failure (invalid config, unreadable
/// or malformed corpus, nothing to train from) is returned to the caller.
pub fn bootstrap(config: &ParleyConfig) -> Result<(ChatBot, TrainingReport)> {
    config.validate()?;

    let corpora = load_corpora(config)?;
    if corpora.is_empty() {
        return Err(ParleyError::Corpus(
            "no training corpus configured: enable training.bundled_corpus or list corpus_files"
                .to_string(),
        ));
    }

    let started = Instant::now();
    let bot = ChatBot::from_config(config);
    let trainer = CorpusTrainer::new(bot.storage());

    let mut conversations = 0;
    let mut categories = Vec::new();
    for corpus in &corpora {
        let stats = trainer.train(corpus)?;
        conversations += stats.conversations;
        categories.extend(corpus.categories.iter().cloned());
    }

    let report = TrainingReport {
        conversations,
        statements: bot.statement_count()?,
        categories,
        elapsed: started.elapsed(),
    };

    info!(
        bot = %bot.name(),
        conversations = report.conversations,
        statements = report.statements,
        categories = ?report.categories,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "Chat bot trained"
    );

    Ok((bot, report))
}

fn load_corpora(config: &ParleyConfig) -> Result<Vec<Corpus>> {
    let mut corpora = Vec::new();
    if config.training.bundled_corpus {
        corpora.extend(corpus::english()?);
    }
    for path in &config.training.corpus_files {
        corpora.push(Corpus::load(path)?);
        info!(path = %path.display(), "Loaded extra corpus");
    }
    Ok(corpora)
}
