//! Text similarity scoring.
//!
//! Comparators work on normalized text (see [`crate::preprocess::normalize`])
//! and return a confidence in `[0.0, 1.0]`.

use std::collections::HashSet;

use parley_core::config::ComparatorKind;

/// Scores how similar two pieces of text are.
pub trait Comparator: Send + Sync {
    /// Similarity in `[0.0, 1.0]`; 1.0 means identical.
    fn compare(&self, a: &str, b: &str) -> f32;
}

/// `1 - edit_distance / max_len`, measured in characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct LevenshteinDistance;

impl Comparator for LevenshteinDistance {
    fn compare(&self, a: &str, b: &str) -> f32 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let max_len = a.len().max(b.len());
        if max_len == 0 {
            return 0.0;
        }
        let distance = edit_distance(&a, &b);
        1.0 - distance as f32 / max_len as f32
    }
}

/// Intersection over union of the two word sets.
#[derive(Debug, Default, Clone, Copy)]
pub struct JaccardSimilarity;

impl Comparator for JaccardSimilarity {
    fn compare(&self, a: &str, b: &str) -> f32 {
        let a: HashSet<&str> = a.split_whitespace().collect();
        let b: HashSet<&str> = b.split_whitespace().collect();
        let union = a.union(&b).count();
        if union == 0 {
            return 0.0;
        }
        a.intersection(&b).count() as f32 / union as f32
    }
}

/// Build the comparator named in config.
pub fn comparator_for(kind: ComparatorKind) -> Box<dyn Comparator> {
    match kind {
        ComparatorKind::Levenshtein => Box::new(LevenshteinDistance),
        ComparatorKind::Jaccard => Box::new(JaccardSimilarity),
    }
}

/// Two-row Levenshtein distance.
fn edit_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_edit_distance() {
        let d = |a: &str, b: &str| {
            let a: Vec<char> = a.chars().collect();
            let b: Vec<char> = b.chars().collect();
            edit_distance(&a, &b)
        };
        assert_eq!(d("kitten", "sitting"), 3);
        assert_eq!(d("", "abc"), 3);
        assert_eq!(d("abc", ""), 3);
        assert_eq!(d("same", "same"), 0);
        assert_eq!(d("flaw", "lawn"), 2);
    }

    #[test]
    fn test_levenshtein_identical_is_one() {
        assert!(approx(LevenshteinDistance.compare("hello", "hello"), 1.0));
    }

    #[test]
    fn test_levenshtein_partial() {
        // kitten -> sitting: distance 3 over max length 7.
        let score = LevenshteinDistance.compare("kitten", "sitting");
        assert!(approx(score, 1.0 - 3.0 / 7.0));
    }

    #[test]
    fn test_levenshtein_disjoint_is_zero() {
        assert!(approx(LevenshteinDistance.compare("abc", "xyz"), 0.0));
    }

    #[test]
    fn test_levenshtein_empty_inputs() {
        assert!(approx(LevenshteinDistance.compare("", ""), 0.0));
        assert!(approx(LevenshteinDistance.compare("", "hi"), 0.0));
    }

    #[test]
    fn test_jaccard() {
        assert!(approx(JaccardSimilarity.compare("how are you", "how are you"), 1.0));
        // {how, are, you} vs {how, old, are, you}: 3 / 4.
        assert!(approx(
            JaccardSimilarity.compare("how are you", "how old are you"),
            0.75
        ));
        assert!(approx(JaccardSimilarity.compare("hello", "goodbye"), 0.0));
        assert!(approx(JaccardSimilarity.compare("", ""), 0.0));
    }

    #[test]
    fn test_jaccard_ignores_word_order() {
        assert!(approx(JaccardSimilarity.compare("are you ok", "ok you are"), 1.0));
    }

    #[test]
    fn test_comparator_for() {
        let lev = comparator_for(ComparatorKind::Levenshtein);
        let jac = comparator_for(ComparatorKind::Jaccard);
        // Same words, different order: only Jaccard calls them identical.
        assert!(lev.compare("a b", "b a") < 1.0);
        assert!(approx(jac.compare("a b", "b a"), 1.0));
    }
}
