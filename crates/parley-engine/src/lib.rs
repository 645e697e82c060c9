//! Conversational engine for Parley.
//!
//! Stores trained statements in memory and answers utterances with the
//! response to the closest known prompt. Training happens once through
//! [`bootstrap`], which returns a ready [`ChatBot`] or an error.

pub mod bootstrap;
pub mod chatbot;
pub mod comparison;
pub mod corpus;
pub mod error;
pub mod matching;
pub mod preprocess;
pub mod selection;
pub mod store;
pub mod trainer;

pub use bootstrap::{bootstrap, TrainingReport};
pub use chatbot::{ChatBot, ConversationalEngine};
pub use comparison::{Comparator, JaccardSimilarity, LevenshteinDistance};
pub use corpus::Corpus;
pub use error::EngineError;
pub use matching::BestMatch;
pub use store::StatementStore;
pub use trainer::{CorpusTrainer, ListTrainer};
