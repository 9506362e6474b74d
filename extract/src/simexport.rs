//! Vector extraction from simulator preset source files.
//!
//! Simulator presets are typed object-literal source: each preset constructs
//! a stat map via `Stats.fromMap({ [Stat.HitRating]: 0.82, ... })` with
//! fractional weights on a 0–1 scale. One file may hold several such
//! constructions (one per gear variant); all are collected in encounter
//! order. This recognizes just that construction pattern, not the host
//! language.

use std::sync::LazyLock;

use regex::Regex;
use statweight_core::{STAT_COUNT, Stat, StatVector};
use tracing::debug;

static FROM_MAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Stats\.fromMap\s*\(\s*\{([^{}]*)\}").expect("static regex must compile")
});

// [Stat.StatHitRating]: 0.82  (also the unprefixed [Stat.HitRating] spelling)
static STAT_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[Stat\.(\w+)\]\s*:\s*(-?[0-9]*\.?[0-9]+)").expect("static regex must compile")
});

/// Extracts one [`StatVector`] per stat-map construction in `text`.
///
/// Keys outside the tracked stat enumeration are ignored; stats absent from
/// a construction default their slot to zero. Fractional weights are scaled
/// to the integer preset scale on construction.
pub fn extract_vectors(text: &str) -> Vec<StatVector> {
    let mut vectors = Vec::new();

    for caps in FROM_MAP.captures_iter(text) {
        let mut weights = [0f64; STAT_COUNT];
        for entry in STAT_ENTRY.captures_iter(&caps[1]) {
            let Some(stat) = Stat::from_export_key(&entry[1]) else {
                debug!(key = &entry[1], "ignoring untracked stat key");
                continue;
            };
            if let Ok(value) = entry[2].parse::<f64>() {
                weights[stat.slot()] = value;
            }
        }
        vectors.push(StatVector::from_fractional(&weights));
    }

    vectors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_and_scales_single_construction() {
        let text = r#"
export const P1_EP_PRESET = PresetUtils.makePresetEpWeights(
    'P1',
    Stats.fromMap({
        [Stat.StatHitRating]: 0.82,
        [Stat.StatCritRating]: 0.44,
        [Stat.StatHasteRating]: 0.45,
        [Stat.StatExpertiseRating]: 0.82,
        [Stat.StatMasteryRating]: 0.35,
    }),
);
"#;
        let vectors = extract_vectors(text);
        assert_eq!(
            vectors,
            vec![StatVector::from_slots([0, 0, 0, 82, 44, 45, 82, 35])]
        );
    }

    #[test]
    fn test_accepts_unprefixed_stat_keys() {
        let text = "Stats.fromMap({ [Stat.HitRating]: 0.82, [Stat.CritRating]: 0.44 })";
        let vectors = extract_vectors(text);
        assert_eq!(
            vectors,
            vec![StatVector::from_slots([0, 0, 0, 82, 44, 0, 0, 0])]
        );
    }

    #[test]
    fn test_untracked_keys_are_ignored() {
        let text = "Stats.fromMap({ [Stat.StatStrength]: 2.5, [Stat.StatHitRating]: 0.9 })";
        let vectors = extract_vectors(text);
        assert_eq!(
            vectors,
            vec![StatVector::from_slots([0, 0, 0, 90, 0, 0, 0, 0])]
        );
    }

    #[test]
    fn test_collects_multiple_constructions_in_order() {
        let text = "
Stats.fromMap({ [Stat.StatHitRating]: 0.1 })
// second variant
Stats.fromMap({ [Stat.StatHitRating]: 0.2 })
";
        let vectors = extract_vectors(text);
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].get(Stat::Hit), 10);
        assert_eq!(vectors[1].get(Stat::Hit), 20);
    }

    #[test]
    fn test_no_construction_yields_empty() {
        assert!(extract_vectors("export const nothing = 1;").is_empty());
    }
}
