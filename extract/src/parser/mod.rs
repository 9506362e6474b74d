//! Scripting-table parsers for the two preset-file conventions.
//!
//! Two table formats carry the same data:
//!
//! - [`AddonTable`] — the hand-maintained presets file. A top-level table
//!   holds one sub-table per class (keyed `["CLASS"]`); category keys inside
//!   a class section are assigned one of several shorthand encodings,
//!   recognized by the ranked [`grammars`].
//! - [`ExportTable`] — the generated reference-weights file written by
//!   [`output`](crate::output): class comment headers followed by positional
//!   literals, with numbered sub-tables for multi-preset categories.
//!
//! Neither parser handles the host language generally; each recognizes the
//! small fixed set of textual patterns present in the known input corpus.
//! Unrecognized text contributes no vectors and is never fatal.

pub mod grammars;

use std::sync::LazyLock;

use regex::Regex;
use statweight_core::{CategoryFilter, Class, PresetSet, StatVector};
use tracing::{debug, info};

use crate::source::PresetSource;
use grammars::{parse_slots, recognize_category};

/// Hand-maintained addon preset table.
pub struct AddonTable;

impl PresetSource for AddonTable {
    fn name(&self) -> &'static str {
        "addon-presets"
    }

    fn extract(&self, text: &str, filter: &CategoryFilter) -> PresetSet {
        let mut set = PresetSet::new();
        let body = preset_table_body(text);

        for class in filter.classes() {
            let Some(section) = class_section(body, class) else {
                continue;
            };
            for spec in filter.specs_for(class) {
                let Some(blob) = category_blob(section, spec) else {
                    debug!(%class, %spec, "no category assignment found");
                    continue;
                };
                let vectors = recognize_category(blob);
                if vectors.is_empty() {
                    debug!(%class, %spec, "category text not recognized");
                } else {
                    set.insert(class, spec.clone(), vectors);
                }
            }
        }

        info!(
            source = self.name(),
            classes = set.class_count(),
            categories = set.category_count(),
            "preset table parsed"
        );
        set
    }
}

/// Generated reference-weights table (the serializer's own grammar).
pub struct ExportTable;

struct ExportPatterns {
    single: Regex,
    multi_open: Regex,
    preset_entry: Regex,
}

static EXPORT: LazyLock<ExportPatterns> = LazyLock::new(|| ExportPatterns {
    // [frost] = {0, 0, 0, 82, 44, 45, 82, 35},
    single: Regex::new(r"^\[(\w+)\]\s*=\s*\{([^{}]+)\}\s*,?$").expect("static regex must compile"),
    // [frost] = {
    multi_open: Regex::new(r"^\[(\w+)\]\s*=\s*\{$").expect("static regex must compile"),
    // [preset_1] = {0, 0, 0, 82, 44, 45, 82, 35},
    preset_entry: Regex::new(r"^\[preset_\d+\]\s*=\s*\{([^{}]+)\}\s*,?$")
        .expect("static regex must compile"),
});

impl PresetSource for ExportTable {
    fn name(&self) -> &'static str {
        "export-table"
    }

    fn extract(&self, text: &str, filter: &CategoryFilter) -> PresetSet {
        let mut set = PresetSet::new();
        let mut current_class: Option<Class> = None;
        let mut lines = text.lines().map(str::trim);

        while let Some(line) = lines.next() {
            if let Some(header) = line.strip_prefix("-- ") {
                if let Some(class) = Class::from_token(header.trim()) {
                    current_class = Some(class);
                }
                continue;
            }
            let Some(class) = current_class else {
                continue;
            };

            if let Some(caps) = EXPORT.single.captures(line) {
                let spec = &caps[1];
                if filter.allows(class, spec)
                    && let Some(slots) = parse_slots(&caps[2])
                {
                    set.insert(class, spec, vec![StatVector::from_slots(slots)]);
                }
            } else if let Some(caps) = EXPORT.multi_open.captures(line) {
                let spec = caps[1].to_string();
                let mut vectors = Vec::new();
                for entry in lines.by_ref() {
                    if entry == "}," || entry == "}" {
                        break;
                    }
                    if let Some(entry_caps) = EXPORT.preset_entry.captures(entry)
                        && let Some(slots) = parse_slots(&entry_caps[1])
                    {
                        vectors.push(StatVector::from_slots(slots));
                    }
                }
                if filter.allows(class, &spec) && !vectors.is_empty() {
                    set.insert(class, spec, vectors);
                }
            }
        }

        info!(
            source = self.name(),
            classes = set.class_count(),
            categories = set.category_count(),
            "export table parsed"
        );
        set
    }
}

/// Locates the top-level preset table body, falling back to the whole text
/// for bare snippets.
fn preset_table_body(text: &str) -> &str {
    static TABLE_START: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"local\s+presets\s*=\s*\{").expect("static regex must compile")
    });

    match TABLE_START.find(text) {
        Some(found) => balanced_table(text, found.end() - 1).unwrap_or(text),
        None => text,
    }
}

/// Section of `body` assigned to `["CLASS"]`, braces included.
fn class_section(body: &str, class: Class) -> Option<&str> {
    let key = Regex::new(&format!(
        r#"\[\s*"{}"\s*\]\s*=\s*\{{"#,
        regex::escape(class.token())
    ))
    .expect("class key regex must compile");

    let found = key.find(body)?;
    balanced_table(body, found.end() - 1)
}

/// Text assigned to the category key for `spec` within one class section.
///
/// Key forms `[specs.CLASS.spec]`, `[spec]` and `["spec"]` are all accepted.
/// A table assignment spans to its balanced closing brace; a shorthand call
/// spans to the end of its line.
fn category_blob<'a>(section: &'a str, spec: &str) -> Option<&'a str> {
    let key = Regex::new(&format!(
        r#"\[\s*(?:[A-Za-z_][A-Za-z0-9_.]*\.)?"?{}"?\s*\]\s*=\s*"#,
        regex::escape(spec)
    ))
    .expect("category key regex must compile");

    let found = key.find(section)?;
    let rest = &section[found.end()..];

    if rest.starts_with('{') {
        balanced_table(section, found.end())
    } else {
        let line = rest.split_terminator('\n').next().unwrap_or(rest);
        Some(line.trim_end())
    }
}

/// Slice of `text` from the opening brace at `open` to its balanced close.
fn balanced_table(text: &str, open: usize) -> Option<&str> {
    debug_assert_eq!(text.as_bytes().get(open), Some(&b'{'));
    let mut depth = 0usize;
    for (offset, byte) in text.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[open..=open + offset]);
                }
            }
            _ => {}
        }
    }
    None
}
