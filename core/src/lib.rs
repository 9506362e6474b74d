//! Core data model for stat-weight preset reconciliation.
//!
//! This crate defines the types shared by both extraction pipelines and the
//! comparator:
//!
//! - [`Stat`] / [`StatVector`] — the canonical 8-stat enumeration and the
//!   fixed-order integer weight vector every source text is normalized into.
//! - [`Class`] — the playable class roster with both naming conventions
//!   (uppercase table tokens and simulator directory names).
//! - [`addon_spec_key`] — the total translation from simulator spec names to
//!   addon spec keys.
//! - [`CategoryFilter`] — the allow-list deciding which (class, spec)
//!   categories are in scope; the single source of truth consulted by every
//!   pipeline.
//! - [`PresetSet`] — the normalized `class → spec → [StatVector]` collection
//!   produced by extraction and consumed by comparison.
//!
//! # Example
//!
//! ```
//! use statweight_core::{CategoryFilter, Class, PresetSet, Stat, StatVector};
//!
//! let filter = CategoryFilter::dps();
//! assert!(filter.allows(Class::Warrior, "arms"));
//! assert!(!filter.allows(Class::Warrior, "protection"));
//!
//! let mut set = PresetSet::new();
//! set.insert(Class::Warrior, "arms", vec![StatVector::melee(80, 40, 40, 80, 30)]);
//!
//! let presets = set.get(Class::Warrior, "arms").unwrap();
//! assert_eq!(presets[0].get(Stat::Hit), 80);
//! assert_eq!(presets[0].get(Stat::Spirit), 0);
//! ```

mod preset;
mod roster;
mod stats;

pub use preset::PresetSet;
pub use roster::{CategoryFilter, Class, addon_spec_key};
pub use stats::{STAT_COUNT, Stat, StatVector, WEIGHT_SCALE};
