//! Analysis handler.

use axum::{body::Bytes, extract::State, Json};

use mixsight::{AnalysisRequest, CorrelationAnalysisResult};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// POST /api/analyze - run the pipeline over an [`AnalysisRequest`] body.
///
/// The body is decoded here rather than through the `Json` extractor so that
/// malformed JSON is reported in the same error shape as invalid profiles.
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CorrelationAnalysisResult>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("request body is empty".to_string()));
    }

    let request: AnalysisRequest =
        serde_json::from_slice(&body).map_err(mixsight::MixsightError::from)?;

    let analyzer = state.analyzer.clone();
    let result = tokio::task::spawn_blocking(move || {
        analyzer.analyze(&request).map(|result| (request.dataset_name, result))
    })
    .await
    .map_err(|e| ApiError::Internal(format!("analysis task failed: {}", e)))?;

    let (dataset, result) = result?;
    tracing::info!(
        %dataset,
        correlations = result.correlations.len(),
        insights = result.insights.len(),
        "analysis served"
    );

    Ok(Json(result))
}
