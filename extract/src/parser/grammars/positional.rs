//! Positional-literal grammar: the whole blob is one flat 8-number table.

use std::sync::LazyLock;

use regex::Regex;
use statweight_core::StatVector;

use super::{VectorGrammar, parse_slots};

// Anchored to the whole blob so literals nested inside sub-tables are left
// for the weights-field and multi-preset grammars.
static LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\{([^{}]+)\}\s*,?\s*$").expect("static regex must compile")
});

pub struct PositionalGrammar;

impl VectorGrammar for PositionalGrammar {
    fn name(&self) -> &'static str {
        "positional"
    }

    fn recognize(&self, blob: &str) -> Vec<StatVector> {
        LITERAL
            .captures(blob)
            .and_then(|caps| parse_slots(&caps[1]))
            .map(StatVector::from_slots)
            .into_iter()
            .collect()
    }
}
