//! Ordered grammar recognizers for category-scoped preset text.
//!
//! The hand-maintained preset table intermixes several shorthand encodings of
//! "the same" data for historical reasons. Rather than requiring one
//! canonical form, each encoding gets an independent recognizer and
//! [`recognize_category`] tries them in a fixed priority order, taking the
//! first that matches. Malformed or unrecognized text yields an empty result,
//! never an error.

pub mod caster;
pub mod melee;
pub mod multi;
pub mod positional;
pub mod weights_field;

use statweight_core::{STAT_COUNT, StatVector};
use tracing::debug;

/// Pluggable recognizer for one textual preset encoding.
///
/// `blob` is the source text assigned to a single (class, spec) category key.
/// A recognizer returns every vector it can extract, or an empty vector when
/// its encoding is not present.
pub trait VectorGrammar {
    fn name(&self) -> &'static str;
    fn recognize(&self, blob: &str) -> Vec<StatVector>;
}

/// Grammars in recognition priority order; the first non-empty result wins.
pub fn ranked_grammars() -> [&'static dyn VectorGrammar; 5] {
    [
        &positional::PositionalGrammar,
        &melee::MeleeGrammar,
        &caster::CasterGrammar,
        &weights_field::WeightsFieldGrammar,
        &multi::MultiPresetGrammar,
    ]
}

/// Runs the ranked grammars over one category-scoped blob.
pub fn recognize_category(blob: &str) -> Vec<StatVector> {
    for grammar in ranked_grammars() {
        let vectors = grammar.recognize(blob);
        if !vectors.is_empty() {
            debug!(
                grammar = grammar.name(),
                vectors = vectors.len(),
                "category text recognized"
            );
            return vectors;
        }
    }
    debug!("no grammar matched category text");
    Vec::new()
}

/// Parses a comma-separated argument list into canonical slots.
///
/// Returns `None` unless exactly [`STAT_COUNT`] integers are present.
/// Negative weights are passed through unchanged.
pub(crate) fn parse_slots(list: &str) -> Option<[i32; STAT_COUNT]> {
    let mut slots = [0i32; STAT_COUNT];
    let mut count = 0;
    for item in list.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        if count == STAT_COUNT {
            return None;
        }
        slots[count] = item.parse().ok()?;
        count += 1;
    }
    (count == STAT_COUNT).then_some(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slots_requires_exactly_eight() {
        assert_eq!(
            parse_slots("0, 0, 0, 82, 44, 45, 82, 35"),
            Some([0, 0, 0, 82, 44, 45, 82, 35])
        );
        assert_eq!(parse_slots("1, 2, 3"), None);
        assert_eq!(parse_slots("1, 2, 3, 4, 5, 6, 7, 8, 9"), None);
        assert_eq!(parse_slots(""), None);
    }

    #[test]
    fn test_parse_slots_accepts_negatives_and_trailing_comma() {
        assert_eq!(
            parse_slots("-10, 0, 0, 1, 2, 3, 4, 5,"),
            Some([-10, 0, 0, 1, 2, 3, 4, 5])
        );
    }

    #[test]
    fn test_parse_slots_rejects_non_numeric() {
        assert_eq!(parse_slots("a, b, c, d, e, f, g, h"), None);
        assert_eq!(parse_slots("1, 2, 3, 4, 5, 6, 7, eight"), None);
    }

    #[test]
    fn test_priority_order_is_fixed() {
        let names: Vec<_> = ranked_grammars().iter().map(|g| g.name()).collect();
        assert_eq!(
            names,
            ["positional", "melee", "caster", "weights-field", "multi-preset"]
        );
    }

    #[test]
    fn test_first_matching_grammar_wins() {
        // A bare positional literal must be claimed by the positional
        // grammar, not fall through to the multi-preset table scan.
        let vectors = recognize_category("{0, 0, 0, 88, 54, 55, 0, 46}");
        assert_eq!(vectors, vec![StatVector::caster(88, 54, 55, 46)]);
    }

    #[test]
    fn test_unrecognized_text_yields_empty() {
        assert!(recognize_category("SomeOtherCall(1, 2)").is_empty());
        assert!(recognize_category("").is_empty());
    }
}
