//! toolframe: report assembly occurrence poses in robot-controller form.
//!
//! Loads a JSON assembly document, locates a named occurrence (by default
//! the tool center point, `TCP`), and prints its world pose as a
//! translation, quaternion, Euler ZYX triple, and ABB pose literal.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use toolframe_assembly::{Assembly, AssemblyDoc};
use toolframe_report::{LengthUnit, PoseReport};

#[derive(Parser)]
#[command(name = "toolframe")]
#[command(about = "Report assembly occurrence poses in robot-controller form")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the occurrence tree with paths and world origins
    Tree {
        /// Path to the assembly JSON document
        assembly: PathBuf,
    },

    /// Report the pose of a named occurrence
    Pose {
        /// Path to the assembly JSON document
        assembly: PathBuf,

        /// Component name to locate
        #[arg(long, default_value = "TCP")]
        target: String,

        /// Length unit the document stores translations in
        #[arg(long, value_enum, default_value_t = LengthUnit::Centimeters)]
        units: LengthUnit,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Report every matching occurrence instead of the first
        #[arg(long)]
        all: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Tree { assembly } => run_tree(assembly, &cli),
        Commands::Pose {
            assembly,
            target,
            units,
            json,
            all,
        } => run_pose(assembly, target, *units, *json, *all, &cli),
    }
}

fn load_assembly(path: &Path, cli: &Cli) -> anyhow::Result<Assembly> {
    if cli.verbose {
        eprintln!("loading assembly document {}", path.display());
    }
    let assembly = AssemblyDoc::from_json_file(path)?.to_assembly();
    if cli.verbose {
        eprintln!("{} occurrences below the root", assembly.all_occurrences().len());
    }
    Ok(assembly)
}

fn run_tree(path: &Path, cli: &Cli) -> anyhow::Result<()> {
    let assembly = load_assembly(path, cli)?;

    for id in assembly.all_occurrences() {
        let origin = assembly.world_transform(id).origin();
        println!(
            "{}  [{:.3}, {:.3}, {:.3}]",
            assembly.path(id),
            origin.x,
            origin.y,
            origin.z
        );
    }
    Ok(())
}

fn run_pose(
    path: &Path,
    target: &str,
    units: LengthUnit,
    json: bool,
    all: bool,
    cli: &Cli,
) -> anyhow::Result<()> {
    let assembly = load_assembly(path, cli)?;
    if cli.verbose {
        eprintln!("document units: {}", units);
    }

    let reports = PoseReport::for_target(&assembly, target, units)?;

    if reports.len() > 1 && !all {
        eprintln!("multiple '{}' occurrences found; using the first:", target);
        for report in &reports {
            eprintln!("  {}", report.path);
        }
    }

    let selected = if all { &reports[..] } else { &reports[..1] };
    for report in selected {
        if json {
            println!("{}", report.to_json()?);
        } else {
            print!("{}", report.render_text());
        }
    }
    Ok(())
}
