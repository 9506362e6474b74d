//! Multi-preset grammar: a table embedding several shorthand calls.
//!
//! Used by categories carrying alternative presets (per-trinket or
//! per-item-level variants). Every embedded call yields one vector, in
//! encounter order; a partial parse keeps whatever was recognized.

use std::sync::LazyLock;

use regex::Regex;
use statweight_core::StatVector;

use super::{VectorGrammar, parse_slots};

static CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\s*\(([^()]*)\)").expect("static regex must compile")
});

pub struct MultiPresetGrammar;

impl VectorGrammar for MultiPresetGrammar {
    fn name(&self) -> &'static str {
        "multi-preset"
    }

    fn recognize(&self, blob: &str) -> Vec<StatVector> {
        if !blob.trim_start().starts_with('{') {
            return Vec::new();
        }

        let mut vectors = Vec::new();
        for caps in CALL.captures_iter(blob) {
            let args = &caps[2];
            match &caps[1] {
                "MeleePreset" => {
                    if let Some(values) = parse_args::<5>(args) {
                        vectors.push(StatVector::melee(
                            values[0], values[1], values[2], values[3], values[4],
                        ));
                    }
                }
                "CasterPreset" => {
                    if let Some(values) = parse_args::<4>(args) {
                        vectors.push(StatVector::caster(
                            values[0], values[1], values[2], values[3],
                        ));
                    }
                }
                name if name.ends_with("Preset") => {
                    if let Some(slots) = parse_slots(args) {
                        vectors.push(StatVector::from_slots(slots));
                    }
                }
                _ => {}
            }
        }
        vectors
    }
}

fn parse_args<const N: usize>(list: &str) -> Option<[i32; N]> {
    let mut values = [0i32; N];
    let mut count = 0;
    for item in list.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        if count == N {
            return None;
        }
        values[count] = item.parse().ok()?;
        count += 1;
    }
    (count == N).then_some(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_embedded_calls_in_order() {
        let blob = "{\n  MeleePreset(1, 2, 3, 4, 5),\n  CasterPreset(6, 7, 8, 9),\n}";
        let vectors = MultiPresetGrammar.recognize(blob);
        assert_eq!(
            vectors,
            vec![
                StatVector::melee(1, 2, 3, 4, 5),
                StatVector::caster(6, 7, 8, 9),
            ]
        );
    }

    #[test]
    fn test_full_preset_call_takes_eight_slots() {
        let blob = "{ Preset(0, 0, 0, 82, 44, 45, 82, 35) }";
        let vectors = MultiPresetGrammar.recognize(blob);
        assert_eq!(
            vectors,
            vec![StatVector::from_slots([0, 0, 0, 82, 44, 45, 82, 35])]
        );
    }

    #[test]
    fn test_partial_parse_keeps_recognized_entries() {
        // The malformed second call is dropped; no minimum count is enforced.
        let blob = "{ MeleePreset(1, 2, 3, 4, 5), MeleePreset(broken), Unrelated(9) }";
        let vectors = MultiPresetGrammar.recognize(blob);
        assert_eq!(vectors, vec![StatVector::melee(1, 2, 3, 4, 5)]);
    }

    #[test]
    fn test_requires_table_blob() {
        assert!(
            MultiPresetGrammar
                .recognize("MeleePreset(1, 2, 3, 4, 5)")
                .is_empty()
        );
    }
}
