//! Calculation run service.

use cb_engine::{CombustionEngine, CombustionResult};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::case_service;
use crate::error::AppResult;
use crate::progress::{RunProgressEvent, RunStage};

/// Request to run one case file.
pub struct RunRequest<'a> {
    pub case_path: &'a Path,
    /// JSON fuel catalog layered over the builtin fuels.
    pub catalog_path: Option<&'a Path>,
}

/// Wall-clock timing of a run.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub load_time_s: f64,
    pub compute_time_s: f64,
    pub total_time_s: f64,
}

#[derive(Debug, Clone)]
pub struct RunResponse {
    pub case_name: String,
    pub result: CombustionResult,
    pub timing: RunTimingSummary,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    stage: RunStage,
    started: Instant,
    message: Option<String>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(RunProgressEvent::stage(
            stage,
            started.elapsed().as_secs_f64(),
            message,
        ));
    }
}

/// Load, resolve and compute a case.
pub fn run_case(request: &RunRequest) -> AppResult<RunResponse> {
    run_case_with_progress(request, None)
}

/// Load, resolve and compute a case, reporting each stage.
pub fn run_case_with_progress(
    request: &RunRequest,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();
    let mut timing = RunTimingSummary::default();

    emit_progress(
        &mut progress_cb,
        RunStage::LoadingCase,
        started,
        Some(request.case_path.display().to_string()),
    );
    let case = case_service::load_case(request.case_path)?;

    emit_progress(&mut progress_cb, RunStage::LoadingCatalog, started, None);
    let catalog = case_service::load_catalog(request.catalog_path)?;

    emit_progress(&mut progress_cb, RunStage::ResolvingFuels, started, None);
    let resolved = cb_project::resolve(&case, &catalog)?;
    timing.load_time_s = started.elapsed().as_secs_f64();

    emit_progress(
        &mut progress_cb,
        RunStage::Computing,
        started,
        Some(format!("{} fuel(s)", resolved.mixture.len())),
    );
    let compute_start = Instant::now();
    let engine = CombustionEngine::new(resolved.config);
    let result = engine.compute(&resolved.mixture, &resolved.conditions)?;
    timing.compute_time_s = compute_start.elapsed().as_secs_f64();
    timing.total_time_s = started.elapsed().as_secs_f64();

    emit_progress(&mut progress_cb, RunStage::Completed, started, None);
    info!(
        case = %case.name,
        efficiency = result.combustion_efficiency,
        flame_temperature_k = result.flame_temperature_k,
        total_time_s = timing.total_time_s,
        "case computed"
    );

    Ok(RunResponse {
        case_name: case.name,
        result,
        timing,
    })
}
