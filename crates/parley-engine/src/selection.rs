//! Picking one reply out of several stored responses.

use std::collections::HashMap;

use parley_core::config::ResponseSelection;
use parley_core::types::Statement;
use rand::seq::IndexedRandom;

/// Pick one response from `options` with the given method.
///
/// Returns `None` only when `options` is empty.
pub fn select_response(method: ResponseSelection, options: &[Statement]) -> Option<&Statement> {
    match method {
        ResponseSelection::First => options.first(),
        ResponseSelection::MostFrequent => most_frequent(options),
        ResponseSelection::Random => options.choose(&mut rand::rng()),
    }
}

/// The response whose text occurs most often; ties go to the earliest one.
fn most_frequent(options: &[Statement]) -> Option<&Statement> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for statement in options {
        *counts.entry(statement.search_text.as_str()).or_insert(0) += 1;
    }

    let mut best: Option<(&Statement, usize)> = None;
    for statement in options {
        let count = counts
            .get(statement.search_text.as_str())
            .copied()
            .unwrap_or(0);
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((statement, count)),
        }
    }
    best.map(|(statement, _)| statement)
}
