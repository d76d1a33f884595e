//! Load, process, save: the full pipeline over one input directory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use eq_phases::{PhaseCategory, PhaseProcessor};
use eq_report::{REPORT_FILE_NAME, SURROGATE_FILE_NAME, SurrogateVector};
use eq_store::{CategoryCounts, PhaseStore, RunManifest, SavedDocuments, compute_report_digest};

use crate::error::{AppError, AppResult};

/// Request to execute the processing pipeline.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    /// Directory holding the condensed report and the surrogate vector.
    pub input_dir: PathBuf,
    /// Directory the phase documents are written to. Created when absent.
    pub output_dir: PathBuf,
    /// Write `manifest.json` next to the documents.
    pub write_manifest: bool,
}

impl PipelineRequest {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            write_manifest: true,
        }
    }
}

/// Wall-clock seconds spent per pipeline stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineTiming {
    pub load_time_s: f64,
    pub process_time_s: f64,
    pub save_time_s: f64,
    pub total_time_s: f64,
}

/// What a pipeline run produced.
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    pub report_digest: String,
    pub timesteps: usize,
    pub phase_counts: CategoryCounts,
    pub surrogate_entries: usize,
    pub outputs: SavedDocuments,
    pub manifest_path: Option<PathBuf>,
    pub timing: PipelineTiming,
}

/// Classification-only view of an input directory; nothing is written.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub report_digest: String,
    pub timesteps: usize,
    pub phase_counts: CategoryCounts,
    pub surrogate_entries: usize,
}

/// Run the full pipeline for one input directory.
pub fn run_pipeline(request: &PipelineRequest) -> AppResult<PipelineSummary> {
    let started = Instant::now();

    let processor = load_processor(&request.input_dir)?;
    let load_time_s = started.elapsed().as_secs_f64();

    let process_started = Instant::now();
    let report_digest = compute_report_digest(processor.report());
    let categorized = processor.classify();
    let phase_counts = count_phases(&categorized);
    let documents = categorized.assemble_all();
    let process_time_s = process_started.elapsed().as_secs_f64();

    let save_started = Instant::now();
    let store = PhaseStore::new(request.output_dir.clone())?;
    let outputs = store.save_documents(&documents)?;
    let manifest_path = if request.write_manifest {
        let manifest = RunManifest::now(
            report_digest.clone(),
            processor.report().len(),
            phase_counts.clone(),
            processor.surrogate().len(),
        );
        Some(store.save_manifest(&manifest)?)
    } else {
        None
    };
    let save_time_s = save_started.elapsed().as_secs_f64();

    tracing::info!(
        timesteps = processor.report().len(),
        phases = phase_counts.total(),
        out_dir = %store.out_dir().display(),
        "pipeline complete"
    );

    Ok(PipelineSummary {
        report_digest,
        timesteps: processor.report().len(),
        phase_counts,
        surrogate_entries: processor.surrogate().len(),
        outputs,
        manifest_path,
        timing: PipelineTiming {
            load_time_s,
            process_time_s,
            save_time_s,
            total_time_s: started.elapsed().as_secs_f64(),
        },
    })
}

/// Classify an input directory without writing anything.
pub fn summarize_input(input_dir: &Path) -> AppResult<ReportSummary> {
    let processor = load_processor(input_dir)?;
    let categorized = processor.classify();
    Ok(ReportSummary {
        report_digest: compute_report_digest(processor.report()),
        timesteps: processor.report().len(),
        phase_counts: count_phases(&categorized),
        surrogate_entries: processor.surrogate().len(),
    })
}

fn load_processor(input_dir: &Path) -> AppResult<PhaseProcessor> {
    let report_path = input_dir.join(REPORT_FILE_NAME);
    if !report_path.exists() {
        return Err(AppError::InputNotFound { path: report_path });
    }
    let report = eq_report::load_report(&report_path)?;
    let surrogate = load_surrogate_or_empty(input_dir);
    Ok(PhaseProcessor::new(report, surrogate))
}

/// The surrogate vector is carried through but never transformed, so a
/// missing or unreadable file degrades to an empty mapping with a warning
/// instead of failing the run.
fn load_surrogate_or_empty(input_dir: &Path) -> SurrogateVector {
    let path = input_dir.join(SURROGATE_FILE_NAME);
    if !path.exists() {
        tracing::warn!(path = %path.display(), "surrogate vector not found, continuing without it");
        return SurrogateVector::new();
    }
    match eq_report::load_surrogate(&path) {
        Ok(vector) => vector,
        Err(err) => {
            tracing::warn!(%err, "failed to read surrogate vector, continuing without it");
            SurrogateVector::new()
        }
    }
}

fn count_phases(categorized: &eq_phases::CategorizedPhases) -> CategoryCounts {
    CategoryCounts {
        salt: categorized.phase_count(PhaseCategory::Salt),
        gas: categorized.phase_count(PhaseCategory::Gas),
        solid: categorized.phase_count(PhaseCategory::Solid),
    }
}
