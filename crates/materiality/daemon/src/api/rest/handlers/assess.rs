//! Assessment handler

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use materiality_types::{CompanyProfile, MaterialityAssessment};
use serde::Deserialize;

/// Assess request
///
/// Values arrive as free strings and are validated here, so a bad value
/// is reported with its field and the accepted choices.
#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub sector: String,
    pub geography: String,
    pub size: String,
}

/// Classify a company profile
pub async fn assess(
    State(state): State<AppState>,
    payload: Result<Json<AssessRequest>, JsonRejection>,
) -> ApiResult<Json<MaterialityAssessment>> {
    let request_id = uuid::Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(%request_id, error = %rejection.body_text(), "Malformed assessment request");
        ApiError::BadRequest(rejection.body_text())
    })?;

    let profile = CompanyProfile::parse(&request.sector, &request.geography, &request.size)
        .map_err(|e| {
            tracing::warn!(%request_id, error = %e, "Rejected assessment request");
            e
        })?;

    let assessment = state.classifier.assess(&profile);

    tracing::info!(
        %request_id,
        profile = %profile,
        score = assessment.score,
        band = %assessment.band,
        "Assessment completed"
    );

    Ok(Json(assessment))
}
