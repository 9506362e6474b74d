//! Serialization of preset sets into the export-table grammar.
//!
//! The rendered text is the exact grammar [`ExportTable`] parses back:
//! single-preset categories as a direct positional literal, multi-preset
//! categories as a sub-table with sequentially numbered keys, classes sorted
//! canonically and each preceded by a comment header.
//!
//! [`ExportTable`]: crate::parser::ExportTable

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use statweight_core::PresetSet;
use tracing::info;

use crate::error::SyncError;

const BANNER: &str = "\
-- Stat weights exported from the simulator
-- Format: {Spirit, Dodge, Parry, Hit, Crit, Haste, Expertise, Mastery}
";

/// Renders the export-table text for `set`.
pub fn render_preset_table(set: &PresetSet) -> String {
    let mut out = String::from(BANNER);
    out.push('\n');

    for class in set.classes() {
        let _ = writeln!(out, "-- {class}");
        for (spec, presets) in set.specs(class) {
            match presets {
                [single] => {
                    let _ = writeln!(out, "  [{spec}] = {single},");
                }
                _ => {
                    let _ = writeln!(out, "  [{spec}] = {{");
                    for (index, preset) in presets.iter().enumerate() {
                        let _ = writeln!(out, "    [preset_{}] = {preset},", index + 1);
                    }
                    let _ = writeln!(out, "  }},");
                }
            }
        }
        out.push('\n');
    }

    out
}

/// Writes the rendered table to `path`, overwriting any previous artifact.
pub fn write_preset_table(path: &Path, set: &PresetSet) -> Result<(), SyncError> {
    let rendered = render_preset_table(set);
    fs::write(path, rendered).map_err(|source| SyncError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), categories = set.category_count(), "export table written");
    Ok(())
}
