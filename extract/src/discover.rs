//! Simulator source-tree discovery and extraction.
//!
//! Discovery is an explicit step decoupled from parsing: it returns the
//! (category, file path) pairs found under the simulator tree, so the
//! object-literal recognizer in [`simexport`](crate::simexport) can be tested
//! without a filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use statweight_core::{CategoryFilter, Class, PresetSet, addon_spec_key};
use tracing::{debug, info};

use crate::error::{SyncError, read_to_string};
use crate::simexport;

/// Fixed per-spec preset file name in the simulator tree.
pub const PRESET_FILE: &str = "presets.ts";

/// Subdirectory of the simulator root holding per-class directories.
pub const UI_DIR: &str = "ui";

/// One candidate spec directory found under the simulator tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredSpec {
    pub class: Class,
    /// Spec name in the simulator's convention (directory name).
    pub sim_spec: String,
    pub path: PathBuf,
}

/// Enumerates preset files under `<root>/ui/<class>/<spec>/presets.ts`.
///
/// Class directories and spec directories without the expected file are
/// silently skipped; a missing or unreadable `<root>/ui` is fatal. Results
/// are ordered by class, then by spec directory name.
pub fn discover_preset_files(root: &Path) -> Result<Vec<DiscoveredSpec>, SyncError> {
    let ui_root = root.join(UI_DIR);
    if !ui_root.is_dir() {
        return Err(SyncError::MissingInput(ui_root));
    }

    let mut discovered = Vec::new();
    for class in Class::ALL {
        let class_dir = ui_root.join(class.source_dir());
        if !class_dir.is_dir() {
            continue;
        }

        let mut spec_dirs = read_dir_names(&class_dir).map_err(|source| SyncError::Read {
            path: class_dir.clone(),
            source,
        })?;
        spec_dirs.sort();

        for sim_spec in spec_dirs {
            let preset_path = class_dir.join(&sim_spec).join(PRESET_FILE);
            if preset_path.is_file() {
                discovered.push(DiscoveredSpec {
                    class,
                    sim_spec,
                    path: preset_path,
                });
            }
        }
    }
    Ok(discovered)
}

/// Extracts an in-scope [`PresetSet`] from the simulator tree at `root`.
///
/// Spec directory names are translated to addon spec keys; untranslatable or
/// out-of-scope categories and files yielding no vectors are skipped.
pub fn extract_simulator_presets(
    root: &Path,
    filter: &CategoryFilter,
) -> Result<PresetSet, SyncError> {
    let mut set = PresetSet::new();

    for found in discover_preset_files(root)? {
        let Some(spec) = addon_spec_key(&found.sim_spec) else {
            debug!(sim_spec = %found.sim_spec, "no addon key for spec name");
            continue;
        };
        if !filter.allows(found.class, spec) {
            continue;
        }

        let text = read_to_string(&found.path)?;
        let vectors = simexport::extract_vectors(&text);
        if vectors.is_empty() {
            debug!(class = %found.class, spec, "preset file yielded no vectors");
            continue;
        }
        set.insert(found.class, spec, vectors);
    }

    info!(
        classes = set.class_count(),
        categories = set.category_count(),
        "simulator extraction complete"
    );
    Ok(set)
}

fn read_dir_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}
