//! Melee shorthand grammar: `MeleePreset(hit, crit, haste, expertise, mastery)`.

use std::sync::LazyLock;

use regex::Regex;
use statweight_core::StatVector;

use super::VectorGrammar;

// Anchored: only matches when the call is the whole category assignment.
// Calls embedded in a table body belong to the multi-preset grammar.
static CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*MeleePreset\s*\(\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*\)\s*,?\s*$",
    )
    .expect("static regex must compile")
});

pub struct MeleeGrammar;

impl VectorGrammar for MeleeGrammar {
    fn name(&self) -> &'static str {
        "melee"
    }

    fn recognize(&self, blob: &str) -> Vec<StatVector> {
        let Some(caps) = CALL.captures(blob) else {
            return Vec::new();
        };
        let mut args = [0i32; 5];
        for (arg, cap) in args.iter_mut().zip(caps.iter().skip(1)) {
            let Some(value) = cap.and_then(|m| m.as_str().parse().ok()) else {
                return Vec::new();
            };
            *arg = value;
        }
        vec![StatVector::melee(args[0], args[1], args[2], args[3], args[4])]
    }
}
