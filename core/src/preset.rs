//! Normalized preset collections keyed by (class, spec).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::roster::Class;
use crate::stats::StatVector;

/// A `class → spec → [StatVector]` collection in canonical order.
///
/// A spec may hold one vector (single preset) or several (alternative
/// presets, e.g. per-trinket variants); encounter order of multiples is
/// preserved. Sets are built once by an extraction pipeline and read-only
/// afterward.
///
/// # Examples
///
/// ```
/// use statweight_core::{Class, PresetSet, StatVector};
///
/// let mut set = PresetSet::new();
/// set.insert(Class::Mage, "frost", vec![StatVector::caster(88, 54, 55, 46)]);
/// set.insert(Class::Mage, "fire", vec![StatVector::caster(90, 60, 50, 40)]);
///
/// assert_eq!(set.class_count(), 1);
/// assert_eq!(set.category_count(), 2);
/// // Iteration is sorted: fire before frost.
/// let specs: Vec<_> = set.iter().map(|(_, spec, _)| spec).collect();
/// assert_eq!(specs, ["fire", "frost"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSet {
    classes: BTreeMap<Class, BTreeMap<String, Vec<StatVector>>>,
}

impl PresetSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `vectors` to the (class, spec) category.
    ///
    /// Admission decisions belong to the caller; the set itself applies no
    /// category filtering.
    pub fn insert(&mut self, class: Class, spec: impl Into<String>, vectors: Vec<StatVector>) {
        self.classes
            .entry(class)
            .or_default()
            .entry(spec.into())
            .or_default()
            .extend(vectors);
    }

    /// Preset list for one category, if present.
    pub fn get(&self, class: Class, spec: &str) -> Option<&[StatVector]> {
        self.classes
            .get(&class)?
            .get(spec)
            .map(Vec::as_slice)
    }

    /// Classes present, in canonical order.
    pub fn classes(&self) -> impl Iterator<Item = Class> + '_ {
        self.classes.keys().copied()
    }

    /// (spec, presets) pairs for one class, sorted by spec key.
    pub fn specs(&self, class: Class) -> impl Iterator<Item = (&str, &[StatVector])> {
        self.classes
            .get(&class)
            .into_iter()
            .flat_map(|specs| specs.iter().map(|(spec, v)| (spec.as_str(), v.as_slice())))
    }

    /// Flattened (class, spec, presets) triples in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Class, &str, &[StatVector])> {
        self.classes.iter().flat_map(|(&class, specs)| {
            specs
                .iter()
                .map(move |(spec, v)| (class, spec.as_str(), v.as_slice()))
        })
    }

    /// Number of classes with at least one category.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Total number of (class, spec) categories.
    pub fn category_count(&self) -> usize {
        self.classes.values().map(BTreeMap::len).sum()
    }

    /// Whether the set holds no categories.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_appends_in_encounter_order() {
        let mut set = PresetSet::new();
        set.insert(
            Class::Rogue,
            "combat",
            vec![StatVector::melee(1, 2, 3, 4, 5)],
        );
        set.insert(
            Class::Rogue,
            "combat",
            vec![StatVector::melee(6, 7, 8, 9, 10)],
        );

        let presets = set.get(Class::Rogue, "combat").unwrap();
        assert_eq!(presets.len(), 2);
        assert_eq!(presets[0], StatVector::melee(1, 2, 3, 4, 5));
        assert_eq!(presets[1], StatVector::melee(6, 7, 8, 9, 10));
    }

    #[test]
    fn test_iteration_is_canonical() {
        let mut set = PresetSet::new();
        set.insert(Class::Warrior, "fury", vec![StatVector::ZERO]);
        set.insert(Class::DeathKnight, "unholy", vec![StatVector::ZERO]);
        set.insert(Class::DeathKnight, "frost", vec![StatVector::ZERO]);

        let keys: Vec<_> = set
            .iter()
            .map(|(class, spec, _)| format!("{class} {spec}"))
            .collect();
        assert_eq!(
            keys,
            ["DEATHKNIGHT frost", "DEATHKNIGHT unholy", "WARRIOR fury"]
        );
    }

    #[test]
    fn test_missing_category_is_none() {
        let set = PresetSet::new();
        assert!(set.get(Class::Mage, "arcane").is_none());
        assert!(set.is_empty());
        assert_eq!(set.category_count(), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut set = PresetSet::new();
        set.insert(Class::Shaman, "elemental", vec![StatVector::caster(1, 2, 3, 4)]);

        let json = serde_json::to_string(&set).unwrap();
        let back: PresetSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
