//! Shared extraction contract for the two scripting-table conventions.

use statweight_core::{CategoryFilter, PresetSet};

/// One source convention for preset tables.
///
/// Both table formats — the generated export grammar and the hand-maintained
/// addon grammar — implement this trait, so the comparator consumes
/// [`PresetSet`]s without knowing which concrete format produced them.
pub trait PresetSource {
    /// Short label for logging.
    fn name(&self) -> &'static str;

    /// Extracts every in-scope category from one whole source text.
    ///
    /// Unrecognized category text contributes no vectors; categories outside
    /// `filter` are excluded. Neither is an error.
    fn extract(&self, text: &str, filter: &CategoryFilter) -> PresetSet;
}
