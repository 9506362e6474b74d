//! Caster shorthand grammar: `CasterPreset(hit, crit, haste, mastery)`.

use std::sync::LazyLock;

use regex::Regex;
use statweight_core::StatVector;

use super::VectorGrammar;

static CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*CasterPreset\s*\(\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*\)\s*,?\s*$",
    )
    .expect("static regex must compile")
});

pub struct CasterGrammar;

impl VectorGrammar for CasterGrammar {
    fn name(&self) -> &'static str {
        "caster"
    }

    fn recognize(&self, blob: &str) -> Vec<StatVector> {
        let Some(caps) = CALL.captures(blob) else {
            return Vec::new();
        };
        let mut args = [0i32; 4];
        for (arg, cap) in args.iter_mut().zip(caps.iter().skip(1)) {
            let Some(value) = cap.and_then(|m| m.as_str().parse().ok()) else {
                return Vec::new();
            };
            *arg = value;
        }
        vec![StatVector::caster(args[0], args[1], args[2], args[3])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caster_slot_placement() {
        let vectors = CasterGrammar.recognize("CasterPreset(88, 54, 55, 46)");
        assert_eq!(
            vectors,
            vec![StatVector::from_slots([0, 0, 0, 88, 54, 55, 0, 46])]
        );
    }

    #[test]
    fn test_rejects_melee_call() {
        assert!(
            CasterGrammar
                .recognize("MeleePreset(1, 2, 3, 4, 5)")
                .is_empty()
        );
    }
}
