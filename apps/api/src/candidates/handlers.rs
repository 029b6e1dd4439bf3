//! Axum route handlers for requirements setup, analysis, and the candidate pool.

use std::path::PathBuf;

use axum::{
    body::Bytes,
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{analyze_resume, AnalysisResult, JobRequirements, RecommendationTier};
use crate::candidates::demo::{demo_requirements, run_demo};
use crate::candidates::exports::export_report;
use crate::candidates::persistence::{load_results, save_results};
use crate::candidates::pool::{CandidateRow, PoolSummary};
use crate::candidates::upload::resume_text_from_upload;
use crate::errors::AppError;
use crate::state::AppState;

const ALL_TIERS: [RecommendationTier; 4] = [
    RecommendationTier::HighlyRecommended,
    RecommendationTier::Recommended,
    RecommendationTier::Maybe,
    RecommendationTier::NotRecommended,
];

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SetRequirementsRequest {
    pub position: String,
    /// Comma-separated, e.g. "Python, Django, SQL".
    pub skills: String,
    pub required_experience: Option<u32>,
    pub required_education: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    /// Overrides the session requirements for this one analysis.
    pub requirements: Option<JobRequirements>,
    #[serde(default)]
    pub save_report: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub report_path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct TierCount {
    pub tier: RecommendationTier,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<CandidateRow>,
    pub summary: PoolSummary,
    pub tiers: Vec<TierCount>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultsFileRequest {
    pub file_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub saved: usize,
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct LoadResponse {
    pub loaded: usize,
    pub total: usize,
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct DemoResponse {
    pub requirements: JobRequirements,
    pub analyzed: usize,
    pub candidates: Vec<CandidateRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Requirements
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/requirements
pub async fn handle_get_requirements(
    State(state): State<AppState>,
) -> Result<Json<JobRequirements>, AppError> {
    current_requirements(&state)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No job requirements set".to_string()))
}

/// PUT /api/v1/requirements
///
/// Blank fields fall back to the setup defaults.
pub async fn handle_set_requirements(
    State(state): State<AppState>,
    Json(req): Json<SetRequirementsRequest>,
) -> Result<Json<JobRequirements>, AppError> {
    let requirements = JobRequirements::from_input(
        &req.position,
        &req.skills,
        req.required_experience,
        &req.required_education,
    );
    info!(
        "Job requirements set: {} ({} skills, {} years, {})",
        requirements.position,
        requirements.required_skills.len(),
        requirements.required_experience,
        requirements.required_education
    );

    *state.requirements.write().await = Some(requirements.clone());
    Ok(Json(requirements))
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyses
///
/// Analyzes pasted resume text and adds the result to the pool.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("No resume text entered".to_string()));
    }

    let requirements = match req.requirements {
        Some(requirements) => requirements,
        None => required_requirements(&state).await?,
    };

    let analysis = analyze_resume(&req.resume_text, &requirements);
    let response = record_analysis(&state, analysis, req.save_report).await?;
    Ok(Json(response))
}

/// POST /api/v1/analyses/upload
///
/// Multipart form with a `file` field (plain text or PDF). Uses the session
/// requirements and always writes the report file.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let requirements = required_requirements(&state).await?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((file_name, content_type, bytes));
        break;
    }

    let (file_name, content_type, bytes) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    // PDF extraction and parsing are CPU-bound.
    let analysis = run_blocking("upload", move || {
        let text =
            resume_text_from_upload(file_name.as_deref(), content_type.as_deref(), &bytes)?;
        Ok::<_, AppError>(analyze_resume(&text, &requirements))
    })
    .await??;

    let response = record_analysis(&state, analysis, true).await?;
    Ok(Json(response))
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate pool
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/candidates
///
/// Ranked by total score, highest first.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<CandidateListResponse>, AppError> {
    let pool = state.pool.read().await;
    let tiers = ALL_TIERS
        .iter()
        .map(|&tier| TierCount {
            tier,
            count: pool.tier_count(tier),
        })
        .collect();

    Ok(Json(CandidateListResponse {
        candidates: pool.rows(),
        summary: pool.summary(),
        tiers,
    }))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisResult>, AppError> {
    let pool = state.pool.read().await;
    let result = pool.get(id).cloned();
    result
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}

/// GET /api/v1/candidates/:id/report
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<String, AppError> {
    let pool = state.pool.read().await;
    let report = pool.get(id).map(|r| r.report.clone());
    report.ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}

/// POST /api/v1/candidates/save
///
/// An empty body saves to the configured results file.
pub async fn handle_save_candidates(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveResponse>, AppError> {
    let req = results_file_request(&body)?;
    let path = state.config.results_path(req.file_name.as_deref())?;

    let results = state.pool.read().await.results().to_vec();
    if results.is_empty() {
        return Err(AppError::Validation("No resumes to save".to_string()));
    }

    let saved = results.len();
    let target = path.clone();
    run_blocking("save", move || save_results(&target, &results))
        .await?
        .inspect_err(|e| warn!("Failed to save results: {e}"))?;

    Ok(Json(SaveResponse { saved, path }))
}

/// POST /api/v1/candidates/load
///
/// Appends previously saved results to the pool. A missing file loads nothing.
pub async fn handle_load_candidates(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoadResponse>, AppError> {
    let req = results_file_request(&body)?;
    let path = state.config.results_path(req.file_name.as_deref())?;

    let source = path.clone();
    let loaded = run_blocking("load", move || load_results(&source))
        .await?
        .inspect_err(|e| warn!("Failed to load results: {e}"))?;
    if loaded.is_empty() {
        info!("No data found in {}", path.display());
    }

    let mut pool = state.pool.write().await;
    let count = loaded.len();
    pool.extend(loaded);

    Ok(Json(LoadResponse {
        loaded: count,
        total: pool.len(),
        path,
    }))
}

/// POST /api/v1/demo
///
/// Installs the demo requirements and analyzes the three sample resumes.
pub async fn handle_run_demo(
    State(state): State<AppState>,
) -> Result<Json<DemoResponse>, AppError> {
    let requirements = demo_requirements();
    let results = run_demo(&requirements);
    let analyzed = results.len();

    *state.requirements.write().await = Some(requirements.clone());

    let mut pool = state.pool.write().await;
    pool.extend(results);
    info!("Demo completed: {analyzed} resumes analyzed");

    Ok(Json(DemoResponse {
        requirements,
        analyzed,
        candidates: pool.rows(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn current_requirements(state: &AppState) -> Option<JobRequirements> {
    state.requirements.read().await.clone()
}

/// Analysis can't run until requirements exist.
async fn required_requirements(state: &AppState) -> Result<JobRequirements, AppError> {
    current_requirements(state).await.ok_or_else(|| {
        AppError::Validation("Please set up job requirements first".to_string())
    })
}

/// Only an empty body means "use the defaults"; anything else must be valid JSON.
fn results_file_request(body: &Bytes) -> Result<ResultsFileRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ResultsFileRequest::default());
    }
    Json::<ResultsFileRequest>::from_bytes(body)
        .map(|Json(req)| req)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e.body_text())))
}

/// Runs blocking file I/O off the async workers.
async fn run_blocking<T, F>(op: &str, f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in {op}: {e}")))
}

/// Adds a result to the pool, optionally writing its report file first.
/// The report file is numbered by the result's position in the pool, so the
/// write lock is held until the result is pushed.
async fn record_analysis(
    state: &AppState,
    analysis: AnalysisResult,
    export: bool,
) -> Result<AnalyzeResponse, AppError> {
    let mut pool = state.pool.write().await;
    let sequence = pool.len() + 1;

    let report_path = if export {
        let dir = state.config.reports_dir.clone();
        let name = analysis.resume.name.clone();
        let report = analysis.report.clone();
        let path =
            run_blocking("export", move || export_report(&dir, &name, sequence, &report)).await??;
        Some(path)
    } else {
        None
    };

    info!(
        "Analyzed {}: {}/100 ({})",
        analysis.resume.name,
        analysis.total_score(),
        analysis.recommendation.label()
    );
    pool.push(analysis.clone());

    Ok(AnalyzeResponse {
        analysis,
        report_path,
    })
}
