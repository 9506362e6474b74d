use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use statweight_core::{CategoryFilter, PresetSet};
use statweight_extract::compare::{Comparison, compare};
use statweight_extract::discover::extract_simulator_presets;
use statweight_extract::error::read_to_string;
use statweight_extract::output::write_preset_table;
use statweight_extract::report::{ComparisonBundle, render_text};
use statweight_extract::{parse_addon_presets, parse_export_table};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "weight-sync")]
#[command(about = "Reconcile addon stat-weight presets against simulator exports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract simulator stat weights and write the export table.
    Extract(ExtractArgs),
    /// Compare an export table against the current preset table.
    Compare(CompareArgs),
    /// Extract, write the export table, then compare in one run.
    Sync(SyncArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Simulator source tree root (the directory containing ui/).
    #[arg(long)]
    sim_root: PathBuf,
    /// Output path for the generated export table.
    #[arg(long)]
    output: PathBuf,
}

#[derive(Debug, Args)]
struct CompareArgs {
    /// Generated export table holding the reference weights.
    #[arg(long)]
    reference: PathBuf,
    /// Hand-maintained preset table currently shipped.
    #[arg(long)]
    current: PathBuf,
    /// Report output format.
    #[arg(long, default_value = "text")]
    format: ReportFormat,
}

#[derive(Debug, Args)]
struct SyncArgs {
    /// Simulator source tree root (the directory containing ui/).
    #[arg(long)]
    sim_root: PathBuf,
    /// Hand-maintained preset table currently shipped.
    #[arg(long)]
    current: PathBuf,
    /// Output path for the generated export table.
    #[arg(long)]
    output: PathBuf,
    /// Report output format.
    #[arg(long, default_value = "text")]
    format: ReportFormat,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Extract(args) => run_extract(args),
        Command::Compare(args) => run_compare(args),
        Command::Sync(args) => run_sync(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_extract(args: ExtractArgs) -> Result<(), String> {
    let set = extract_and_write(&args.sim_root, &args.output)?;
    print_extraction_summary(&set);
    Ok(())
}

fn run_compare(args: CompareArgs) -> Result<(), String> {
    let filter = CategoryFilter::dps();

    eprintln!("Parsing reference weights...");
    let reference_text = read_to_string(&args.reference).map_err(|err| err.to_string())?;
    let reference = parse_export_table(&reference_text, &filter);

    eprintln!("Parsing current presets...");
    let current_text = read_to_string(&args.current).map_err(|err| err.to_string())?;
    let current = parse_addon_presets(&current_text, &filter);

    emit_report(compare(&reference, &current), args.format)
}

fn run_sync(args: SyncArgs) -> Result<(), String> {
    let filter = CategoryFilter::dps();
    let reference = extract_and_write(&args.sim_root, &args.output)?;

    let current_text = read_to_string(&args.current).map_err(|err| err.to_string())?;
    let current = parse_addon_presets(&current_text, &filter);

    emit_report(compare(&reference, &current), args.format)
}

fn extract_and_write(sim_root: &Path, output: &Path) -> Result<PresetSet, String> {
    eprintln!("Extracting stat weights from {}...", sim_root.display());
    let set = extract_simulator_presets(sim_root, &CategoryFilter::dps())
        .map_err(|err| err.to_string())?;

    write_preset_table(output, &set).map_err(|err| err.to_string())?;
    eprintln!("Saved to {}", output.display());
    Ok(set)
}

fn print_extraction_summary(set: &PresetSet) {
    println!("Found stat weights for {} specs", set.category_count());
    println!();
    println!("Summary by class:");
    for class in set.classes() {
        let specs: Vec<&str> = set.specs(class).map(|(spec, _)| spec).collect();
        println!("  {class}: {}", specs.join(", "));
    }
}

fn emit_report(comparison: Comparison, format: ReportFormat) -> Result<(), String> {
    match format {
        ReportFormat::Text => {
            let stdout = io::stdout();
            render_text(&comparison, &mut stdout.lock())
                .map_err(|err| format!("failed to write report: {err}"))
        }
        ReportFormat::Json => {
            let bundle = ComparisonBundle::new(PACKAGE_VERSION, comparison);
            let json = bundle.to_json().map_err(|err| err.to_string())?;
            println!("{json}");
            Ok(())
        }
    }
}
