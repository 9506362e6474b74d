//! Stat enumeration and fixed-order weight vectors.
//!
//! Every source convention — simulator object literals, addon table
//! shorthands, the generated export table — normalizes into a [`StatVector`]:
//! exactly [`STAT_COUNT`] integer slots in one canonical stat order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of tracked stats; every [`StatVector`] has exactly this many slots.
pub const STAT_COUNT: usize = 8;

/// Factor applied when converting simulator fractional weights (0–1 scale)
/// to the integer scale used by preset tables.
pub const WEIGHT_SCALE: f64 = 100.0;

/// One reforgeable stat, declared in canonical slot order.
///
/// The discriminant doubles as the vector slot index, so the enum order is
/// load-bearing and must match the positional-literal convention
/// `{Spirit, Dodge, Parry, Hit, Crit, Haste, Expertise, Mastery}`.
///
/// # Examples
///
/// ```
/// use statweight_core::Stat;
///
/// assert_eq!(Stat::Hit.slot(), 3);
/// assert_eq!(Stat::from_export_key("StatHitRating"), Some(Stat::Hit));
/// assert_eq!(Stat::from_export_key("HitRating"), Some(Stat::Hit));
/// assert_eq!(Stat::from_export_key("StatStrength"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Spirit,
    Dodge,
    Parry,
    Hit,
    Crit,
    Haste,
    Expertise,
    Mastery,
}

impl Stat {
    /// All stats in canonical slot order.
    pub const ALL: [Stat; STAT_COUNT] = [
        Stat::Spirit,
        Stat::Dodge,
        Stat::Parry,
        Stat::Hit,
        Stat::Crit,
        Stat::Haste,
        Stat::Expertise,
        Stat::Mastery,
    ];

    /// Canonical 0-based slot index of this stat.
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// Display name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Stat::Spirit => "Spirit",
            Stat::Dodge => "Dodge",
            Stat::Parry => "Parry",
            Stat::Hit => "Hit",
            Stat::Crit => "Crit",
            Stat::Haste => "Haste",
            Stat::Expertise => "Expertise",
            Stat::Mastery => "Mastery",
        }
    }

    /// Maps a simulator stat-enum key to a stat.
    ///
    /// Both the prefixed (`StatHitRating`) and unprefixed (`HitRating`)
    /// spellings occur in preset source files; keys outside the tracked
    /// enumeration return `None` and are ignored by callers.
    pub fn from_export_key(key: &str) -> Option<Stat> {
        let key = key.strip_prefix("Stat").unwrap_or(key);
        match key {
            "Spirit" => Some(Stat::Spirit),
            "DodgeRating" => Some(Stat::Dodge),
            "ParryRating" => Some(Stat::Parry),
            "HitRating" => Some(Stat::Hit),
            "CritRating" => Some(Stat::Crit),
            "HasteRating" => Some(Stat::Haste),
            "ExpertiseRating" => Some(Stat::Expertise),
            "MasteryRating" => Some(Stat::Mastery),
            _ => None,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable fixed-order integer weight vector, one slot per [`Stat`].
///
/// Slots not present in source text are zero. `Display` renders the
/// positional table literal used by both the serializer and the reporter.
///
/// # Examples
///
/// ```
/// use statweight_core::{Stat, StatVector};
///
/// let v = StatVector::melee(10, 20, 30, 40, 50);
/// assert_eq!(v.slots(), &[0, 0, 0, 10, 20, 30, 40, 50]);
/// assert_eq!(v.get(Stat::Expertise), 40);
/// assert_eq!(v.to_string(), "{0, 0, 0, 10, 20, 30, 40, 50}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatVector([i32; STAT_COUNT]);

impl StatVector {
    /// The all-zero vector.
    pub const ZERO: StatVector = StatVector([0; STAT_COUNT]);

    /// Builds a vector from raw slots in canonical order.
    pub const fn from_slots(slots: [i32; STAT_COUNT]) -> Self {
        StatVector(slots)
    }

    /// Builds a vector from fractional-scale weights, multiplying each slot
    /// by [`WEIGHT_SCALE`] and rounding to the nearest integer.
    ///
    /// Integral inputs survive a scale → render → re-parse round trip
    /// exactly; no range validation is applied.
    pub fn from_fractional(weights: &[f64; STAT_COUNT]) -> Self {
        let mut slots = [0i32; STAT_COUNT];
        for (slot, weight) in slots.iter_mut().zip(weights) {
            *slot = (weight * WEIGHT_SCALE).round() as i32;
        }
        StatVector(slots)
    }

    /// Melee shorthand: hit/crit/haste/expertise/mastery, rest zero.
    pub const fn melee(hit: i32, crit: i32, haste: i32, expertise: i32, mastery: i32) -> Self {
        StatVector([0, 0, 0, hit, crit, haste, expertise, mastery])
    }

    /// Caster shorthand: hit/crit/haste/mastery, rest zero.
    pub const fn caster(hit: i32, crit: i32, haste: i32, mastery: i32) -> Self {
        StatVector([0, 0, 0, hit, crit, haste, 0, mastery])
    }

    /// Weight for one stat.
    pub const fn get(self, stat: Stat) -> i32 {
        self.0[stat.slot()]
    }

    /// All slots in canonical order.
    pub const fn slots(&self) -> &[i32; STAT_COUNT] {
        &self.0
    }

    /// Iterates (stat, weight) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.iter().map(|&stat| (stat, self.0[stat.slot()]))
    }
}

impl fmt::Display for StatVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{slot}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_order_matches_slot_indices() {
        for (index, stat) in Stat::ALL.iter().enumerate() {
            assert_eq!(stat.slot(), index);
        }
        assert_eq!(Stat::ALL[0], Stat::Spirit);
        assert_eq!(Stat::ALL[STAT_COUNT - 1], Stat::Mastery);
    }

    #[test]
    fn test_from_export_key_accepts_both_spellings() {
        for stat in Stat::ALL {
            let rating = match stat {
                Stat::Spirit => "Spirit".to_string(),
                other => format!("{}Rating", other.name()),
            };
            assert_eq!(Stat::from_export_key(&rating), Some(stat));
            assert_eq!(Stat::from_export_key(&format!("Stat{rating}")), Some(stat));
        }
        assert_eq!(Stat::from_export_key("AttackPower"), None);
    }

    #[test]
    fn test_from_fractional_scales_and_rounds() {
        let v = StatVector::from_fractional(&[0.0, 0.0, 0.0, 0.82, 0.44, 0.455, 0.0, 0.46]);
        assert_eq!(v.slots(), &[0, 0, 0, 82, 44, 46, 0, 46]);
    }

    #[test]
    fn test_from_fractional_passes_negatives_through() {
        let v = StatVector::from_fractional(&[-0.25, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.5]);
        assert_eq!(v.get(Stat::Spirit), -25);
        assert_eq!(v.get(Stat::Mastery), 150);
    }

    #[test]
    fn test_shorthand_slot_placement() {
        assert_eq!(
            StatVector::melee(10, 20, 30, 40, 50).slots(),
            &[0, 0, 0, 10, 20, 30, 40, 50]
        );
        assert_eq!(
            StatVector::caster(88, 54, 55, 46).slots(),
            &[0, 0, 0, 88, 54, 55, 0, 46]
        );
    }

    #[test]
    fn test_display_renders_positional_literal() {
        let v = StatVector::from_slots([0, 0, 0, 82, 44, 45, 82, 35]);
        assert_eq!(v.to_string(), "{0, 0, 0, 82, 44, 45, 82, 35}");
    }

    #[test]
    fn test_serde_round_trip() {
        let v = StatVector::from_slots([1, 2, 3, 4, 5, 6, 7, 8]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1,2,3,4,5,6,7,8]");
        let back: StatVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
