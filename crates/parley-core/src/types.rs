//! Shared domain types: stored statements and engine replies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A line of text known to the engine.
///
/// `in_response_to` links a statement to the text it answers; the first line
/// of a conversation has none. The `search_*` fields hold the normalized forms
/// the comparators work on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub id: Uuid,
    pub text: String,
    pub search_text: String,
    pub in_response_to: Option<String>,
    pub search_in_response_to: Option<String>,
    /// Conversation or corpus the statement was trained from.
    pub conversation: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Statement {
    /// Create a statement with a fresh ID and the current timestamp.
    pub fn new(text: impl Into<String>, search_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            search_text: search_text.into(),
            in_response_to: None,
            search_in_response_to: None,
            conversation: String::new(),
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Mark this statement as a response to `text` (with its normalized form).
    pub fn responding_to(mut self, text: impl Into<String>, search_text: impl Into<String>) -> Self {
        self.in_response_to = Some(text.into());
        self.search_in_response_to = Some(search_text.into());
        self
    }

    pub fn in_conversation(mut self, conversation: impl Into<String>) -> Self {
        self.conversation = conversation.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// The engine's answer to an utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Text returned to the client.
    pub text: String,
    /// How closely the input matched a known statement (0.0 to 1.0).
    pub confidence: f32,
    /// The cleaned utterance this reply answers.
    pub in_response_to: String,
    /// Known statement the utterance was matched to, if any.
    pub matched: Option<String>,
}

impl Reply {
    /// True when the reply came from the default responses, not the store.
    pub fn is_default(&self) -> bool {
        self.matched.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_builder() {
        let stmt = Statement::new("Hi there", "hi there")
            .responding_to("Hello!", "hello")
            .in_conversation("greetings")
            .with_tags(vec!["greetings".to_string()]);

        assert_eq!(stmt.text, "Hi there");
        assert_eq!(stmt.search_text, "hi there");
        assert_eq!(stmt.in_response_to.as_deref(), Some("Hello!"));
        assert_eq!(stmt.search_in_response_to.as_deref(), Some("hello"));
        assert_eq!(stmt.conversation, "greetings");
        assert_eq!(stmt.tags, vec!["greetings"]);
    }

    #[test]
    fn test_statement_ids_are_unique() {
        let a = Statement::new("a", "a");
        let b = Statement::new("a", "a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_statement_serde_round_trip() {
        let stmt = Statement::new("How are you?", "how are you").responding_to("Hi", "hi");
        let json = serde_json::to_string(&stmt).unwrap();
        let back: Statement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stmt);
    }

    #[test]
    fn test_reply_is_default() {
        let reply = Reply {
            text: "I am sorry, but I do not understand.".to_string(),
            confidence: 0.0,
            in_response_to: "qwerty".to_string(),
            matched: None,
        };
        assert!(reply.is_default());

        let reply = Reply {
            matched: Some("Hello".to_string()),
            ..reply
        };
        assert!(!reply.is_default());
    }
}
