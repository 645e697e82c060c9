//! Training corpora.
//!
//! A corpus file is JSON shaped like
//! `{ "categories": ["greetings"], "conversations": [["Hello", "Hi"], ...] }`.
//! The English corpus ships inside the binary.

use std::path::Path;

use serde::Deserialize;

use crate::error::EngineError;

/// Category files of the bundled English corpus, in training order.
const ENGLISH: &[(&str, &str)] = &[
    ("greetings", include_str!("../corpus/english/greetings.json")),
    ("conversations", include_str!("../corpus/english/conversations.json")),
    ("botprofile", include_str!("../corpus/english/botprofile.json")),
    ("computers", include_str!("../corpus/english/computers.json")),
    ("emotion", include_str!("../corpus/english/emotion.json")),
    ("food", include_str!("../corpus/english/food.json")),
    ("humor", include_str!("../corpus/english/humor.json")),
    ("science", include_str!("../corpus/english/science.json")),
];

#[derive(Debug, Deserialize)]
struct CorpusFile {
    #[serde(default)]
    categories: Vec<String>,
    conversations: Vec<Vec<String>>,
}

/// One category of training conversations.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    /// File stem or bundled category name.
    pub name: String,
    pub categories: Vec<String>,
    /// Each conversation is an ordered exchange; every line answers the one
    /// before it.
    pub conversations: Vec<Vec<String>>,
}

impl Corpus {
    /// Parse a corpus from JSON text.
    pub fn from_json(name: &str, json: &str) -> Result<Self, EngineError> {
        let file: CorpusFile = serde_json::from_str(json)
            .map_err(|e| EngineError::Corpus(format!("{}: {}", name, e)))?;

        if file.conversations.is_empty() {
            return Err(EngineError::Corpus(format!(
                "{}: corpus has no conversations",
                name
            )));
        }

        let categories = if file.categories.is_empty() {
            vec![name.to_string()]
        } else {
            file.categories
        };

        Ok(Self {
            name: name.to_string(),
            categories,
            conversations: file.conversations,
        })
    }

    /// Read and parse a corpus file; the file stem becomes its name.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Corpus(format!("{}: {}", path.display(), e)))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_json(&name, &json)
    }

    /// Total number of lines across all conversations.
    pub fn statement_count(&self) -> usize {
        self.conversations.iter().map(Vec::len).sum()
    }
}

/// The English corpus compiled into the binary.
pub fn english() -> Result<Vec<Corpus>, EngineError> {
    ENGLISH
        .iter()
        .map(|(name, json)| Corpus::from_json(name, json))
        .collect()
}
