//! Best-match lookup over stored statements.
//!
//! The input is compared against the text every known response answers.
//! The closest one wins, and one of the responses stored for it is returned.

use parley_core::config::{EngineConfig, ResponseSelection, DEFAULT_RESPONSE};
use parley_core::types::Reply;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::comparison::{comparator_for, Comparator};
use crate::error::EngineError;
use crate::preprocess::normalize;
use crate::selection::select_response;
use crate::store::StatementStore;

/// Closest known prompt for an input.
#[derive(Debug, Clone, PartialEq)]
struct ClosestMatch {
    /// The original `in_response_to` text of the winning candidate.
    text: String,
    /// Its normalized form, which keys the response pool.
    search: String,
    confidence: f32,
}

/// Logic adapter that answers with the response to the closest known prompt.
pub struct BestMatch {
    comparator: Box<dyn Comparator>,
    selection: ResponseSelection,
    maximum_similarity_threshold: f32,
    default_responses: Vec<String>,
}

impl std::fmt::Debug for BestMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BestMatch")
            .field("selection", &self.selection)
            .field("maximum_similarity_threshold", &self.maximum_similarity_threshold)
            .field("default_responses", &self.default_responses)
            .finish_non_exhaustive()
    }
}

impl BestMatch {
    pub fn new(
        comparator: Box<dyn Comparator>,
        selection: ResponseSelection,
        maximum_similarity_threshold: f32,
        default_responses: Vec<String>,
    ) -> Self {
        Self {
            comparator,
            selection,
            maximum_similarity_threshold,
            default_responses,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            comparator_for(config.comparator),
            config.response_selection,
            config.maximum_similarity_threshold,
            config.default_responses.clone(),
        )
    }

    /// Answer `input`, which must already be whitespace-cleaned.
    pub fn process(&self, input: &str, store: &StatementStore) -> Result<Reply, EngineError> {
        let search_text = normalize(input);

        let closest = match self.closest_match(&search_text, store)? {
            Some(closest) if closest.confidence > 0.0 => closest,
            _ => {
                debug!(input, "No stored statement resembles the input");
                return Ok(self.default_reply(input));
            }
        };

        let options = store.responses_to(&closest.search)?;
        let Some(response) = select_response(self.selection, &options) else {
            return Ok(self.default_reply(input));
        };

        debug!(
            matched = %closest.text,
            confidence = closest.confidence,
            options = options.len(),
            "Selected response"
        );

        Ok(Reply {
            text: response.text.clone(),
            confidence: closest.confidence,
            in_response_to: input.to_string(),
            matched: Some(closest.text),
        })
    }

    /// Scan candidates for the highest score, stopping early once the
    /// threshold is reached.
    fn closest_match(
        &self,
        search_text: &str,
        store: &StatementStore,
    ) -> Result<Option<ClosestMatch>, EngineError> {
        store.with_candidates(|candidates| {
            let mut best: Option<ClosestMatch> = None;
            for candidate in candidates {
                let (Some(text), Some(search)) = (
                    candidate.in_response_to.as_deref(),
                    candidate.search_in_response_to.as_deref(),
                ) else {
                    continue;
                };

                let confidence = self.comparator.compare(search_text, search);
                if best.as_ref().map_or(true, |b| confidence > b.confidence) {
                    best = Some(ClosestMatch {
                        text: text.to_string(),
                        search: search.to_string(),
                        confidence,
                    });
                }
                if confidence >= self.maximum_similarity_threshold {
                    break;
                }
            }
            best
        })
    }

    fn default_reply(&self, input: &str) -> Reply {
        let text = self
            .default_responses
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or_else(|| DEFAULT_RESPONSE.to_string());
        Reply {
            text,
            confidence: 0.0,
            in_response_to: input.to_string(),
            matched: None,
        }
    }
}
