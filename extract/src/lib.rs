//! Stat-weight preset extraction, comparison and reporting.
//!
//! This crate reconciles the numeric stat-weight tables shipped in an
//! addon's preset file against the weights exported by an independently
//! maintained simulator. Two extraction pipelines normalize both sides into
//! [`PresetSet`]s — fixed-order integer vectors keyed by (class, spec) — and
//! a comparator diffs the best-matching preset pair per category:
//!
//! - [`extract_simulator_presets`](discover::extract_simulator_presets) —
//!   walks the simulator source tree, recognizes stat-map object literals,
//!   and scales the fractional weights to the integer preset scale.
//! - [`parse_export_table`] / [`parse_addon_presets`] — parse the two
//!   scripting-table conventions (the generated export grammar and the
//!   hand-maintained shorthand grammars) through one shared
//!   [`PresetSource`] contract.
//! - [`compare::compare`] — selects and diffs the best-matching preset pair
//!   per category; [`report`] renders the outcome.
//!
//! # Example
//!
//! ```
//! use statweight_core::{CategoryFilter, Stat};
//! use statweight_extract::{compare::compare, parse_addon_presets, parse_export_table};
//!
//! let reference = "\
//! -- MAGE
//!   [frost] = {0, 0, 0, 82, 44, 45, 0, 46},
//! ";
//! let current = r#"
//! local presets = {
//!   ["MAGE"] = {
//!     [specs.MAGE.frost] = CasterPreset(88, 54, 55, 46),
//!   },
//! }
//! "#;
//!
//! let filter = CategoryFilter::dps();
//! let outcome = compare(
//!     &parse_export_table(reference, &filter),
//!     &parse_addon_presets(current, &filter),
//! );
//!
//! assert_eq!(outcome.changed.len(), 1);
//! let stats: Vec<_> = outcome.changed[0].entries.iter().map(|e| e.stat).collect();
//! assert_eq!(stats, [Stat::Hit, Stat::Crit, Stat::Haste]);
//! ```
//!
//! All parsing is tolerant by design: unrecognized category text and
//! categories outside the [`CategoryFilter`] yield no vectors and are never
//! fatal. Only missing or unreadable required input files abort a run.
//!
//! [`PresetSet`]: statweight_core::PresetSet
//! [`CategoryFilter`]: statweight_core::CategoryFilter
//! [`PresetSource`]: source::PresetSource

pub mod compare;
pub mod discover;
pub mod error;
pub mod output;
pub mod parser;
pub mod report;
pub mod simexport;
pub mod source;

pub use error::SyncError;
pub use parser::{AddonTable, ExportTable};
pub use source::PresetSource;

use statweight_core::{CategoryFilter, PresetSet};

/// Parses the hand-maintained addon preset table.
pub fn parse_addon_presets(text: &str, filter: &CategoryFilter) -> PresetSet {
    AddonTable.extract(text, filter)
}

/// Parses a generated export table.
pub fn parse_export_table(text: &str, filter: &CategoryFilter) -> PresetSet {
    ExportTable.extract(text, filter)
}
