//! Rendering of comparison outcomes.
//!
//! The text report is purely presentational; every decision (pair selection,
//! diff membership) is made in [`compare`](crate::compare). A serializable
//! envelope is provided for machine-readable output.

use std::io;

use chrono::Utc;
use serde::Serialize;

use crate::compare::Comparison;
use crate::error::SyncError;

const RULE_WIDTH: usize = 90;

/// Writes the full human-readable comparison report.
pub fn render_text(comparison: &Comparison, out: &mut impl io::Write) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(out, "STAT WEIGHT COMPARISON: current presets → simulator reference")?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;

    writeln!(out, "✓ NO CHANGES NEEDED ({} specs):", comparison.matches.len())?;
    let matched: Vec<String> = comparison.matches.iter().map(ToString::to_string).collect();
    writeln!(out, "  {}", matched.join(", "))?;
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;

    if !comparison.changed.is_empty() {
        writeln!(out, "SPECS WITH DIFFERENCES ({} specs):", comparison.changed.len())?;
        writeln!(out)?;

        for diff in &comparison.changed {
            writeln!(out, "┌─ {} - {}", diff.class, diff.spec.to_uppercase())?;
            writeln!(out, "│")?;
            writeln!(out, "│  Current:    {}", diff.current)?;
            writeln!(out, "│  Simulator:  {}", diff.reference)?;
            writeln!(out, "│")?;
            writeln!(out, "│  Changes:")?;
            for entry in &diff.entries {
                let arrow = if entry.delta > 0 { "↑" } else { "↓" };
                let delta = format!("{:+}", entry.delta);
                writeln!(
                    out,
                    "│    • {:<10} {:>3} → {:>3}  ({delta:>4}) {arrow}",
                    entry.stat.name(),
                    entry.current,
                    entry.reference,
                )?;
            }
            if diff.unpaired_presets() > 0 {
                writeln!(
                    out,
                    "│  ({} alternative preset(s) not shown)",
                    diff.unpaired_presets()
                )?;
            }
            writeln!(out, "└─")?;
            writeln!(out)?;
        }
    }

    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "SUMMARY: {} exact matches, {} with differences",
        comparison.matches.len(),
        comparison.changed.len()
    )?;
    writeln!(out, "{rule}")?;
    Ok(())
}

/// Serializable envelope for one comparison run.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonBundle {
    pub tool_version: String,
    pub generated_at: String,
    pub comparison: Comparison,
}

impl ComparisonBundle {
    pub fn new(tool_version: &str, comparison: Comparison) -> Self {
        ComparisonBundle {
            tool_version: tool_version.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            comparison,
        }
    }

    /// Pretty-printed JSON rendering.
    pub fn to_json(&self) -> Result<String, SyncError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
