//! In-memory statement storage.
//!
//! Lookups take a read lock, so concurrent requests never serialize on each
//! other; only training takes the write lock.

use std::sync::RwLock;

use parley_core::types::Statement;

use crate::error::EngineError;

/// Thread-safe in-memory statement store.
#[derive(Debug, Default)]
pub struct StatementStore {
    statements: RwLock<Vec<Statement>>,
}

impl StatementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append statements in order.
    pub fn create_many(&self, statements: Vec<Statement>) -> Result<(), EngineError> {
        let mut guard = self
            .statements
            .write()
            .map_err(|e| EngineError::Storage(format!("store lock poisoned: {}", e)))?;
        guard.extend(statements);
        Ok(())
    }

    pub fn count(&self) -> Result<usize, EngineError> {
        let guard = self
            .statements
            .read()
            .map_err(|e| EngineError::Storage(format!("store lock poisoned: {}", e)))?;
        Ok(guard.len())
    }

    /// Every stored statement answering the normalized prompt `search_text`,
    /// in insertion order. Prompts differing only in case or punctuation
    /// share one pool.
    pub fn responses_to(&self, search_text: &str) -> Result<Vec<Statement>, EngineError> {
        let guard = self
            .statements
            .read()
            .map_err(|e| EngineError::Storage(format!("store lock poisoned: {}", e)))?;
        Ok(guard
            .iter()
            .filter(|s| s.search_in_response_to.as_deref() == Some(search_text))
            .cloned()
            .collect())
    }

    /// Run `f` over the statements that answer something (those with
    /// `in_response_to` set) while holding the read lock.
    pub fn with_candidates<T>(
        &self,
        f: impl FnOnce(&mut dyn Iterator<Item = &Statement>) -> T,
    ) -> Result<T, EngineError> {
        let guard = self
            .statements
            .read()
            .map_err(|e| EngineError::Storage(format!("store lock poisoned: {}", e)))?;
        let mut iter = guard.iter().filter(|s| s.in_response_to.is_some());
        Ok(f(&mut iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn sample() -> Vec<Statement> {
        vec![
            Statement::new("Hello", "hello"),
            Statement::new("Hi there", "hi there").responding_to("Hello", "hello"),
            Statement::new("Hey", "hey").responding_to("Hello", "hello"),
            Statement::new("How are you?", "how are you").responding_to("Hi there", "hi there"),
        ]
    }

    #[test]
    fn test_create_and_count() {
        let store = StatementStore::new();
        assert_eq!(store.count().unwrap(), 0);
        store.create_many(sample()).unwrap();
        assert_eq!(store.count().unwrap(), 4);
    }

    #[test]
    fn test_responses_to_preserves_order() {
        let store = StatementStore::new();
        store.create_many(sample()).unwrap();
        let responses = store.responses_to("hello").unwrap();
        let texts: Vec<&str> = responses.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Hi there", "Hey"]);
        assert!(store.responses_to("unknown").unwrap().is_empty());
    }

    #[test]
    fn test_responses_to_matches_search_form() {
        let store = StatementStore::new();
        store.create_many(sample()).unwrap();
        store
            .create_many(vec![Statement::new("Yo", "yo").responding_to("Hello!", "hello")])
            .unwrap();
        assert_eq!(store.responses_to("hello").unwrap().len(), 3);
        assert!(store.responses_to("Hello").unwrap().is_empty());
    }

    #[test]
    fn test_with_candidates_skips_conversation_openers() {
        let store = StatementStore::new();
        store.create_many(sample()).unwrap();
        let texts = store
            .with_candidates(|iter| iter.map(|s| s.text.clone()).collect::<Vec<_>>())
            .unwrap();
        assert_eq!(texts, vec!["Hi there", "Hey", "How are you?"]);
    }

    #[test]
    fn test_concurrent_reads() {
        let store = Arc::new(StatementStore::new());
        store.create_many(sample()).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.responses_to("hello").unwrap().len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    }
}
