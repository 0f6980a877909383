//! Catalog handler

use crate::api::rest::state::AppState;
use axum::{extract::State, Json};
use materiality_types::Catalog;

/// Accepted profile values and the active score scale
pub async fn get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.classifier.catalog())
}
