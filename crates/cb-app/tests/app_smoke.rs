//! Smoke test for the cb-app service layer.

use cb_app::{
    AppError, CalcWorker, RunRequest, RunStage, load_case, load_catalog, render_text, run_service,
    save_case,
};
use cb_project::CaseFile;
use std::path::PathBuf;

fn repo_path(parts: &[&str]) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    for part in parts {
        path.push(part);
    }
    path
}

#[test]
fn run_shipped_tuneup_case() {
    let case_path = repo_path(&["cases", "boiler_tuneup.yaml"]);
    let request = RunRequest {
        case_path: &case_path,
        catalog_path: None,
    };

    let mut stages = Vec::new();
    let response = run_service::run_case_with_progress(
        &request,
        Some(&mut |event| stages.push(event.stage)),
    )
    .expect("case should run");

    assert_eq!(response.case_name, "Boiler tune-up");
    assert_eq!(stages.first(), Some(&RunStage::LoadingCase));
    assert_eq!(stages.last(), Some(&RunStage::Completed));
    assert!(response.timing.total_time_s >= response.timing.compute_time_s);

    let result = &response.result;
    assert!(result.air_composition.h2o > 0.0);
    let cost = result.cost_analysis.as_ref().expect("cost analysis requested");
    assert_eq!(cost.points.len(), 10);
    assert_eq!(cost.best_point, 9);
    assert!(cost.points.iter().all(|p| p.efficiency_percent < 100.0));

    let text = render_text(result);
    assert!(text.contains("=== Fuel Cost Analysis ==="));
    assert!(text.contains("Point 10 (best)"));
}

#[test]
fn biogas_case_needs_the_catalog_file() {
    let case_path = repo_path(&["cases", "biogas_cofiring.yaml"]);
    let catalog_path = repo_path(&["data", "fuels.json"]);

    let without = run_service::run_case(&RunRequest {
        case_path: &case_path,
        catalog_path: None,
    });
    assert!(matches!(without, Err(AppError::Validation(_))));

    let with = run_service::run_case(&RunRequest {
        case_path: &case_path,
        catalog_path: Some(&catalog_path),
    })
    .expect("case should run with the catalog file");
    assert_eq!(with.result.mole_fractions.len(), 3);
    assert!(with.result.products.so2 > 0.0);
}

#[test]
fn catalog_file_overlays_builtin_fuels() {
    let catalog = load_catalog(Some(&repo_path(&["data", "fuels.json"]))).unwrap();
    assert!(catalog.get("biogas").is_some());
    assert!(catalog.get("lignite").is_some());
    assert!(catalog.get("diesel").is_some());
}

#[test]
fn save_and_reload_case() {
    let path = std::env::temp_dir().join("cb_app_smoke_case.yaml");
    save_case(&path, &CaseFile::template()).unwrap();
    let loaded = load_case(&path).unwrap();
    assert_eq!(loaded, CaseFile::template());
}

#[test]
fn worker_runs_resolved_case() {
    let case = load_case(&repo_path(&["cases", "boiler_tuneup.yaml"])).unwrap();
    let resolved = cb_project::resolve(&case, &load_catalog(None).unwrap()).unwrap();
    let worker = CalcWorker::start(resolved.mixture, resolved.conditions, resolved.config);
    let result = worker.wait().unwrap();
    assert_eq!(result.combustion_efficiency, 100.0);
}
