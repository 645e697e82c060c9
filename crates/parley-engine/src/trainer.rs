//! Trainers that turn conversations into stored statements.

use parley_core::types::Statement;
use tracing::debug;

use crate::corpus::Corpus;
use crate::error::EngineError;
use crate::preprocess::{clean_whitespace, normalize};
use crate::store::StatementStore;

/// Conversation name given to statements trained from a bare list.
const LIST_CONVERSATION: &str = "training";

/// Trains from an ordered list where every line responds to the one before.
pub struct ListTrainer<'a> {
    store: &'a StatementStore,
}

impl<'a> ListTrainer<'a> {
    pub fn new(store: &'a StatementStore) -> Self {
        Self { store }
    }

    /// Store one conversation. Returns the number of statements created.
    pub fn train<S: AsRef<str>>(&self, conversation: &[S]) -> Result<usize, EngineError> {
        let statements = build_conversation(conversation, LIST_CONVERSATION, &[])?;
        let created = statements.len();
        self.store.create_many(statements)?;
        Ok(created)
    }
}

/// Per-corpus training totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub conversations: usize,
    pub statements: usize,
}

/// Trains from a [`Corpus`], tagging statements with its categories.
pub struct CorpusTrainer<'a> {
    store: &'a StatementStore,
}

impl<'a> CorpusTrainer<'a> {
    pub fn new(store: &'a StatementStore) -> Self {
        Self { store }
    }

    pub fn train(&self, corpus: &Corpus) -> Result<CorpusStats, EngineError> {
        let mut statements = Vec::with_capacity(corpus.statement_count());
        for conversation in &corpus.conversations {
            statements.extend(build_conversation(
                conversation.as_slice(),
                &corpus.name,
                &corpus.categories,
            )?);
        }

        let stats = CorpusStats {
            conversations: corpus.conversations.len(),
            statements: statements.len(),
        };
        self.store.create_many(statements)?;

        debug!(
            corpus = %corpus.name,
            conversations = stats.conversations,
            statements = stats.statements,
            "Corpus trained"
        );
        Ok(stats)
    }
}

fn build_conversation<S: AsRef<str>>(
    lines: &[S],
    conversation: &str,
    tags: &[String],
) -> Result<Vec<Statement>, EngineError> {
    let mut statements = Vec::with_capacity(lines.len());
    let mut previous: Option<(String, String)> = None;

    for line in lines {
        let text = clean_whitespace(line.as_ref());
        if text.is_empty() {
            return Err(EngineError::Corpus(format!(
                "{}: conversation contains an empty statement",
                conversation
            )));
        }
        let search_text = normalize(&text);

        let mut statement = Statement::new(text.clone(), search_text.clone())
            .in_conversation(conversation)
            .with_tags(tags.to_vec());
        if let Some((prev_text, prev_search)) = previous.take() {
            statement = statement.responding_to(prev_text, prev_search);
        }

        statements.push(statement);
        previous = Some((text, search_text));
    }

    Ok(statements)
}
