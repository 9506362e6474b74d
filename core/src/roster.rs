//! Class roster, spec-name translation, and category filtering.
//!
//! Two naming conventions coexist: the simulator keys classes by snake_case
//! directory name (`death_knight`) and specs by snake_case source name
//! (`beast_mastery`), while the addon preset tables key classes by uppercase
//! token (`DEATHKNIGHT`) and specs by a collapsed lowercase key
//! (`beastmastery`). Everything here is fixed configuration data, built once
//! and never mutated.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Playable class.
///
/// Declaration order follows the uppercase token order so that derived `Ord`
/// (and therefore `BTreeMap` iteration) is canonical.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Class {
    #[serde(rename = "DEATHKNIGHT")]
    DeathKnight,
    #[serde(rename = "DRUID")]
    Druid,
    #[serde(rename = "HUNTER")]
    Hunter,
    #[serde(rename = "MAGE")]
    Mage,
    #[serde(rename = "MONK")]
    Monk,
    #[serde(rename = "PALADIN")]
    Paladin,
    #[serde(rename = "PRIEST")]
    Priest,
    #[serde(rename = "ROGUE")]
    Rogue,
    #[serde(rename = "SHAMAN")]
    Shaman,
    #[serde(rename = "WARLOCK")]
    Warlock,
    #[serde(rename = "WARRIOR")]
    Warrior,
}

impl Class {
    /// All classes in canonical token order.
    pub const ALL: [Class; 11] = [
        Class::DeathKnight,
        Class::Druid,
        Class::Hunter,
        Class::Mage,
        Class::Monk,
        Class::Paladin,
        Class::Priest,
        Class::Rogue,
        Class::Shaman,
        Class::Warlock,
        Class::Warrior,
    ];

    /// Uppercase token used as table key and comment header.
    pub const fn token(self) -> &'static str {
        match self {
            Class::DeathKnight => "DEATHKNIGHT",
            Class::Druid => "DRUID",
            Class::Hunter => "HUNTER",
            Class::Mage => "MAGE",
            Class::Monk => "MONK",
            Class::Paladin => "PALADIN",
            Class::Priest => "PRIEST",
            Class::Rogue => "ROGUE",
            Class::Shaman => "SHAMAN",
            Class::Warlock => "WARLOCK",
            Class::Warrior => "WARRIOR",
        }
    }

    /// Directory name used by the simulator source tree.
    pub const fn source_dir(self) -> &'static str {
        match self {
            Class::DeathKnight => "death_knight",
            Class::Druid => "druid",
            Class::Hunter => "hunter",
            Class::Mage => "mage",
            Class::Monk => "monk",
            Class::Paladin => "paladin",
            Class::Priest => "priest",
            Class::Rogue => "rogue",
            Class::Shaman => "shaman",
            Class::Warlock => "warlock",
            Class::Warrior => "warrior",
        }
    }

    /// Resolves an uppercase table token.
    pub fn from_token(token: &str) -> Option<Class> {
        Class::ALL.into_iter().find(|class| class.token() == token)
    }

    /// Resolves a simulator directory name.
    pub fn from_source_dir(dir: &str) -> Option<Class> {
        Class::ALL
            .into_iter()
            .find(|class| class.source_dir() == dir)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Translates a simulator spec name to the addon spec key.
///
/// The mapping is total and unambiguous over the fixed spec enumeration;
/// names outside it return `None` and the category is silently excluded
/// rather than treated as an error.
pub fn addon_spec_key(sim_spec: &str) -> Option<&'static str> {
    match sim_spec {
        "blood" => Some("blood"),
        "frost" => Some("frost"),
        "unholy" => Some("unholy"),
        "balance" => Some("balance"),
        "feral" => Some("feralcombat"),
        "guardian" => Some("guardian"),
        "restoration" => Some("restoration"),
        "beast_mastery" => Some("beastmastery"),
        "marksmanship" => Some("marksmanship"),
        "survival" => Some("survival"),
        "arcane" => Some("arcane"),
        "fire" => Some("fire"),
        "brewmaster" => Some("brewmaster"),
        "mistweaver" => Some("mistweaver"),
        "windwalker" => Some("windwalker"),
        "holy" => Some("holy"),
        "protection" => Some("protection"),
        "retribution" => Some("retribution"),
        "discipline" => Some("discipline"),
        "shadow" => Some("shadow"),
        "assassination" => Some("assassination"),
        "combat" => Some("combat"),
        "subtlety" => Some("subtlety"),
        "elemental" => Some("elemental"),
        "enhancement" => Some("enhancement"),
        "affliction" => Some("affliction"),
        "demonology" => Some("demonology"),
        "destruction" => Some("destruction"),
        "arms" => Some("arms"),
        "fury" => Some("fury"),
        _ => None,
    }
}

/// Fixed allow-list of damage-dealing (class, spec) categories.
const DPS_CATEGORIES: &[(Class, &[&str])] = &[
    (Class::DeathKnight, &["frost", "unholy"]),
    (Class::Druid, &["balance", "feralcombat"]),
    (Class::Hunter, &["beastmastery", "marksmanship", "survival"]),
    (Class::Mage, &["arcane", "fire", "frost"]),
    (Class::Monk, &["windwalker"]),
    (Class::Paladin, &["retribution"]),
    (Class::Priest, &["shadow"]),
    (Class::Rogue, &["assassination", "combat", "subtlety"]),
    (Class::Shaman, &["elemental", "enhancement"]),
    (Class::Warlock, &["affliction", "demonology", "destruction"]),
    (Class::Warrior, &["arms", "fury"]),
];

/// Allow-list of (class, spec) categories admitted into any [`PresetSet`].
///
/// Every pipeline consults the same filter instance before a category is
/// admitted, so the in-scope category space cannot drift between the two
/// extraction sides. Spec keys use the addon naming convention.
///
/// # Examples
///
/// ```
/// use statweight_core::{CategoryFilter, Class};
///
/// let filter = CategoryFilter::dps();
/// assert!(filter.allows(Class::Hunter, "survival"));
/// // Tank and healer specs are out of scope by design.
/// assert!(!filter.allows(Class::Paladin, "holy"));
/// assert_eq!(filter.category_count(), 22);
/// ```
///
/// [`PresetSet`]: crate::PresetSet
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    entries: BTreeMap<Class, Vec<String>>,
}

impl CategoryFilter {
    /// The fixed damage-dealing allow-list (tank/healer specs excluded).
    pub fn dps() -> Self {
        Self::from_entries(
            DPS_CATEGORIES
                .iter()
                .map(|(class, specs)| (*class, specs.iter().map(|s| s.to_string()).collect())),
        )
    }

    /// Builds a filter from explicit (class, specs) entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (Class, Vec<String>)>) -> Self {
        CategoryFilter {
            entries: entries.into_iter().collect(),
        }
    }

    /// Whether any spec of `class` is in scope.
    pub fn allows_class(&self, class: Class) -> bool {
        self.entries.contains_key(&class)
    }

    /// Whether the (class, spec) category is in scope.
    pub fn allows(&self, class: Class, spec: &str) -> bool {
        self.entries
            .get(&class)
            .is_some_and(|specs| specs.iter().any(|s| s == spec))
    }

    /// In-scope spec keys for `class`, in allow-list order.
    pub fn specs_for(&self, class: Class) -> &[String] {
        self.entries.get(&class).map_or(&[], Vec::as_slice)
    }

    /// Classes with at least one in-scope spec, in canonical order.
    pub fn classes(&self) -> impl Iterator<Item = Class> + '_ {
        self.entries.keys().copied()
    }

    /// Total number of (class, spec) categories in scope.
    pub fn category_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_token_round_trip() {
        for class in Class::ALL {
            assert_eq!(Class::from_token(class.token()), Some(class));
            assert_eq!(Class::from_source_dir(class.source_dir()), Some(class));
        }
        assert_eq!(Class::from_token("PANDAREN"), None);
        assert_eq!(Class::from_source_dir("demon_hunter"), None);
    }

    #[test]
    fn test_class_order_is_token_order() {
        let mut sorted = Class::ALL;
        sorted.sort();
        assert_eq!(sorted, Class::ALL);
    }

    #[test]
    fn test_class_serde_uses_tokens() {
        let json = serde_json::to_string(&Class::DeathKnight).unwrap();
        assert_eq!(json, "\"DEATHKNIGHT\"");
        let back: Class = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Class::DeathKnight);
    }

    #[test]
    fn test_spec_translation_total_over_dps_sources() {
        // Every simulator-side DPS spec name must translate to the addon key
        // used in the allow-list.
        let cases = [
            ("beast_mastery", "beastmastery"),
            ("feral", "feralcombat"),
            ("arms", "arms"),
            ("destruction", "destruction"),
        ];
        for (sim, addon) in cases {
            assert_eq!(addon_spec_key(sim), Some(addon));
        }
        assert_eq!(addon_spec_key("gladiator"), None);
    }

    #[test]
    fn test_dps_filter_membership() {
        let filter = CategoryFilter::dps();

        assert!(filter.allows(Class::DeathKnight, "frost"));
        assert!(filter.allows(Class::Mage, "frost"));
        assert!(filter.allows(Class::Druid, "feralcombat"));

        // Tank and healer specs stay excluded even though the class is known.
        assert!(!filter.allows(Class::DeathKnight, "blood"));
        assert!(!filter.allows(Class::Druid, "restoration"));
        assert!(!filter.allows(Class::Monk, "brewmaster"));

        assert!(filter.allows_class(Class::Priest));
        assert_eq!(filter.specs_for(Class::Hunter).len(), 3);
        assert_eq!(filter.category_count(), 22);
    }

    #[test]
    fn test_custom_filter_entries() {
        let filter =
            CategoryFilter::from_entries([(Class::Warrior, vec!["arms".to_string()])]);
        assert!(filter.allows(Class::Warrior, "arms"));
        assert!(!filter.allows(Class::Warrior, "fury"));
        assert!(!filter.allows_class(Class::Mage));
        assert_eq!(filter.category_count(), 1);
    }
}
