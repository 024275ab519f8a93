//! Shiftsheet CLI - shift roster building tool

mod config;
mod guard;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use shiftsheet::prelude::*;
use shiftsheet::MemberColumns;

use config::LayoutConfig;
use guard::RunGuard;

#[derive(Parser)]
#[command(name = "shiftsheet")]
#[command(author, version, about = "Shift roster building and search tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the individual roster from a job sheet
    Build {
        /// Job sheet CSV (jobs x time slots, cells name the assignee)
        job_sheet: PathBuf,

        /// Individual sheet CSV (rebuilt in place unless --output is given)
        individual_sheet: PathBuf,

        /// Output CSV file (default: overwrite the individual sheet)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of job rows in the job sheet
        #[arg(short, long)]
        jobs: Option<u32>,

        /// Layout config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Search the member roster
    Search {
        /// Member roster CSV
        roster: PathBuf,

        /// Only members of this bureau
        #[arg(short, long)]
        bureau: Option<String>,

        /// Only members of this grade
        #[arg(short, long)]
        grade: Option<String>,

        /// Only members who can take this job
        #[arg(short, long)]
        job: Option<String>,

        /// Mark members already placed in this slot of the job sheet
        #[arg(long, requires = "job_sheet")]
        slot: Option<u16>,

        /// Job sheet CSV to check placement against
        #[arg(long, requires = "slot")]
        job_sheet: Option<PathBuf>,

        /// Layout config file (TOML), for the job sheet position
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of job rows in the job sheet
        #[arg(long)]
        jobs: Option<u32>,
    },

    /// Show information about a sheet CSV
    Info {
        /// Input CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            job_sheet,
            individual_sheet,
            output,
            jobs,
            config,
        } => build(
            &job_sheet,
            &individual_sheet,
            output.as_deref(),
            jobs,
            config.as_deref(),
        ),
        Commands::Search {
            roster,
            bureau,
            grade,
            job,
            slot,
            job_sheet,
            config,
            jobs,
        } => search(
            &roster,
            MemberFilter { bureau, grade, job },
            slot,
            job_sheet.as_deref(),
            config.as_deref(),
            jobs,
        ),
        Commands::Info { input } => show_info(&input),
    }
}

fn load_layout(config: Option<&Path>, jobs: Option<u32>) -> Result<RosterLayout> {
    let file = match config {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };
    file.to_layout(jobs)
}

fn read_sheet(path: &Path) -> Result<Worksheet> {
    CsvReader::read_file(path, &CsvReadOptions::default())
        .with_context(|| format!("Failed to read '{}'", path.display()))
}

fn build(
    job_path: &Path,
    individual_path: &Path,
    output: Option<&Path>,
    jobs: Option<u32>,
    config: Option<&Path>,
) -> Result<()> {
    let Some(_guard) = RunGuard::acquire() else {
        bail!("A build is already in progress");
    };

    let layout = load_layout(config, jobs)?;
    let job_sheet = read_sheet(job_path)?;
    let mut individual_sheet = read_sheet(individual_path)?;

    let start = Instant::now();
    let result = build_roster(
        &job_sheet,
        &mut individual_sheet,
        &layout,
        &RenderOptions::default(),
    )
    .context("Roster build failed")?;
    let elapsed = start.elapsed();

    for warning in &result.warnings {
        eprintln!("Warning: {warning}");
    }

    let output = output.unwrap_or(individual_path);
    CsvWriter::write_file(&individual_sheet, output, &CsvWriteOptions::default())
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    println!(
        "Built {} span(s), {} warning(s) in {} ms -> {}",
        result.merged_spans,
        result.warnings.len(),
        elapsed.as_millis(),
        output.display()
    );
    Ok(())
}

fn search(
    roster_path: &Path,
    filter: MemberFilter,
    slot: Option<u16>,
    job_path: Option<&Path>,
    config: Option<&Path>,
    jobs: Option<u32>,
) -> Result<()> {
    let roster_sheet = read_sheet(roster_path)?;
    let used = roster_sheet
        .used_range()
        .context("Member roster is empty")?;
    let directory = MemberDirectory::from_grid(
        &roster_sheet.read_grid(&used),
        &MemberColumns::default(),
    );

    // With --slot, members already holding that slot get a marker.
    let job_grid = match (slot, job_path) {
        (Some(_), Some(path)) => {
            let layout = load_layout(config, jobs)?;
            let sheet = read_sheet(path)?;
            Some(sheet.read_grid(&layout.job_range()))
        }
        _ => None,
    };

    let matches = directory.filter(&filter);
    if matches.is_empty() {
        println!("No members match");
        return Ok(());
    }

    for member in &matches {
        let placed = match (&job_grid, slot) {
            (Some(grid), Some(slot)) if is_placed(grid, slot, &member.name) => " [placed]",
            _ => "",
        };
        println!(
            "{}\t{}\t{}\t{}{}",
            member.bureau,
            member.grade,
            member.name,
            member.jobs.join(","),
            placed
        );
    }
    println!("{} member(s)", matches.len());
    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let sheet = read_sheet(input)?;

    println!("File: {}", input.display());
    println!("Sheet: {}", sheet.name());
    match sheet.used_range() {
        Some(range) => {
            println!("Used range: {}", range);
            println!(
                "Dimensions: {} rows x {} columns",
                range.end.row + 1,
                range.end.col + 1
            );
            println!("Non-empty cells: {}", sheet.cell_count());
        }
        None => println!("Sheet is empty"),
    }
    Ok(())
}
