use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use eq_app::{AppResult, PipelineRequest, PipelineTiming, run_pipeline, summarize_input};
use eq_phases::PhaseCategory;
use eq_store::CategoryCounts;

#[derive(Parser)]
#[command(name = "eq-cli")]
#[command(
    about = "Equiphase CLI - categorized phase reports from condensed equilibrium output",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a condensed report into Salt/Gas/Solids documents
    Process {
        /// Directory containing Condensed_Thermochimica_Report.json
        input_dir: PathBuf,
        /// Directory the phase documents are written to
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,
        /// Skip writing manifest.json next to the documents
        #[arg(long)]
        no_manifest: bool,
    },
    /// Classify a condensed report and print category counts
    Summary {
        /// Directory containing Condensed_Thermochimica_Report.json
        input_dir: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input_dir,
            output_dir,
            no_manifest,
        } => cmd_process(input_dir, output_dir, !no_manifest),
        Commands::Summary { input_dir } => cmd_summary(&input_dir),
    }
}

fn cmd_process(input_dir: PathBuf, output_dir: PathBuf, write_manifest: bool) -> AppResult<()> {
    println!("Processing report in: {}", input_dir.display());

    let mut request = PipelineRequest::new(input_dir, output_dir);
    request.write_manifest = write_manifest;
    let summary = run_pipeline(&request)?;

    println!("✓ Processed {} timesteps", summary.timesteps);
    print_counts(&summary.phase_counts);
    println!("  Surrogate entries: {}", summary.surrogate_entries);
    println!("  Report digest: {}", &summary.report_digest[..12]);

    println!("\nOutputs:");
    for (_, path) in summary.outputs.iter() {
        println!("  {}", path.display());
    }
    if let Some(path) = &summary.manifest_path {
        println!("  {}", path.display());
    }

    print_timing_summary(&summary.timing);

    Ok(())
}

fn cmd_summary(input_dir: &Path) -> AppResult<()> {
    println!("Summarizing report in: {}", input_dir.display());

    let summary = summarize_input(input_dir)?;

    println!("✓ {} timesteps", summary.timesteps);
    print_counts(&summary.phase_counts);
    println!("  Surrogate entries: {}", summary.surrogate_entries);
    println!("  Report digest: {}", &summary.report_digest[..12]);

    Ok(())
}

fn print_counts(counts: &CategoryCounts) {
    for category in PhaseCategory::ALL {
        println!("  {:<6} phases: {}", category.key(), counts.get(category));
    }
}

fn print_timing_summary(timing: &PipelineTiming) {
    let total = timing.total_time_s.max(1.0e-12);
    let load_pct = 100.0 * timing.load_time_s / total;
    let process_pct = 100.0 * timing.process_time_s / total;
    let save_pct = 100.0 * timing.save_time_s / total;

    println!("\nTiming summary:");
    println!("  Load:    {:.3}s ({:.1}%)", timing.load_time_s, load_pct);
    println!(
        "  Process: {:.3}s ({:.1}%)",
        timing.process_time_s, process_pct
    );
    println!("  Save:    {:.3}s ({:.1}%)", timing.save_time_s, save_pct);
    println!("  Total:   {:.3}s", timing.total_time_s);
}
