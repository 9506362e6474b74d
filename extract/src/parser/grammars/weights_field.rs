//! Field-style grammar: a sub-table whose `weights` field holds the literal.
//!
//! Example: `{ point = 18000, weights = {0, 0, 0, 88, 54, 55, 0, 46} }`.

use std::sync::LazyLock;

use regex::Regex;
use statweight_core::StatVector;

use super::{VectorGrammar, parse_slots};

static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bweights\s*=\s*\{([^{}]+)\}").expect("static regex must compile")
});

pub struct WeightsFieldGrammar;

impl VectorGrammar for WeightsFieldGrammar {
    fn name(&self) -> &'static str {
        "weights-field"
    }

    fn recognize(&self, blob: &str) -> Vec<StatVector> {
        FIELD
            .captures(blob)
            .and_then(|caps| parse_slots(&caps[1]))
            .map(StatVector::from_slots)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_weights_field() {
        let blob = "{ cap = HitCap, weights = {0, 0, 0, 88, 54, 55, 0, 46} }";
        let vectors = WeightsFieldGrammar.recognize(blob);
        assert_eq!(vectors, vec![StatVector::caster(88, 54, 55, 46)]);
    }

    #[test]
    fn test_ignores_tables_without_weights_field() {
        assert!(
            WeightsFieldGrammar
                .recognize("{ point = 18000, cap = HitCap }")
                .is_empty()
        );
    }

    #[test]
    fn test_rejects_wrong_arity() {
        assert!(
            WeightsFieldGrammar
                .recognize("{ weights = {1, 2, 3} }")
                .is_empty()
        );
    }
}
