//! Component-wise comparison of two normalized preset sets.

use serde::Serialize;
use statweight_core::{Class, PresetSet, Stat, StatVector};
use tracing::debug;

/// One (class, spec) category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryKey {
    pub class: Class,
    pub spec: String,
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.class, self.spec)
    }
}

/// One differing stat slot; produced only where the two values differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    pub stat: Stat,
    /// Value in the candidate (currently shipped) preset.
    pub current: i32,
    /// Value in the reference (simulator) preset.
    pub reference: i32,
    /// `reference - current`.
    pub delta: i32,
}

/// Best-matching preset pair for one category, with its differing slots.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDiff {
    pub class: Class,
    pub spec: String,
    pub reference: StatVector,
    pub current: StatVector,
    pub entries: Vec<DiffEntry>,
    /// Sizes of the two preset lists the pair was drawn from; alternative
    /// presets beyond the selected pair are surfaced through these counts
    /// rather than silently dropped.
    pub reference_presets: usize,
    pub current_presets: usize,
}

impl CategoryDiff {
    /// Alternative presets on either side that were not part of the
    /// selected pair.
    pub fn unpaired_presets(&self) -> usize {
        (self.reference_presets - 1) + (self.current_presets - 1)
    }
}

/// Outcome of comparing a reference set against a candidate set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Comparison {
    /// Categories whose best-matching pair differs nowhere.
    pub matches: Vec<CategoryKey>,
    /// Categories with at least one differing slot.
    pub changed: Vec<CategoryDiff>,
}

impl Comparison {
    /// Total number of categories compared.
    pub fn category_count(&self) -> usize {
        self.matches.len() + self.changed.len()
    }
}

/// Component-wise diff of two vectors; empty means an exact match.
pub fn diff_vectors(reference: &StatVector, current: &StatVector) -> Vec<DiffEntry> {
    Stat::ALL
        .iter()
        .filter_map(|&stat| {
            let reference = reference.get(stat);
            let current = current.get(stat);
            (reference != current).then_some(DiffEntry {
                stat,
                current,
                reference,
                delta: reference - current,
            })
        })
        .collect()
}

/// Compares every reference category against the candidate set.
///
/// Categories absent from the candidate side are skipped. Within a category,
/// every (reference, candidate) preset pair is compared exhaustively — the
/// two lists may have different lengths — and the pair with the fewest
/// differing slots is kept, ties broken by first-encountered order.
pub fn compare(reference: &PresetSet, candidate: &PresetSet) -> Comparison {
    let mut outcome = Comparison::default();

    for (class, spec, ref_presets) in reference.iter() {
        let Some(cand_presets) = candidate.get(class, spec) else {
            debug!(%class, spec, "category missing from candidate set");
            continue;
        };

        let mut best: Option<(StatVector, StatVector, Vec<DiffEntry>)> = None;
        for ref_preset in ref_presets {
            for cand_preset in cand_presets {
                let entries = diff_vectors(ref_preset, cand_preset);
                let improved = best
                    .as_ref()
                    .is_none_or(|(_, _, current_best)| entries.len() < current_best.len());
                if improved {
                    best = Some((*ref_preset, *cand_preset, entries));
                }
            }
        }

        // Both lists hold at least one preset whenever the category exists.
        let Some((ref_preset, cand_preset, entries)) = best else {
            continue;
        };

        if entries.is_empty() {
            outcome.matches.push(CategoryKey {
                class,
                spec: spec.to_string(),
            });
        } else {
            outcome.changed.push(CategoryDiff {
                class,
                spec: spec.to_string(),
                reference: ref_preset,
                current: cand_preset,
                entries,
                reference_presets: ref_presets.len(),
                current_presets: cand_presets.len(),
            });
        }
    }

    outcome
}
