use axum::{extract::State, http::StatusCode, response::Json};
use chrono::NaiveDate;
use iin_core::Gender;
use iin_persons::PersonDirectory;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckIinRequest {
    pub iin: String,
}

#[derive(Debug, Serialize)]
pub struct CheckIinResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /iin_check
///
/// Validation failure is an expected outcome, reported in the response body
/// rather than through the error envelope.
pub async fn check_iin(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckIinRequest>,
) -> (StatusCode, Json<CheckIinResponse>) {
    match state.persons.validate_iin(&req.iin) {
        Ok(decoded) => (
            StatusCode::OK,
            Json(CheckIinResponse {
                valid: true,
                date: Some(decoded.birth_date),
                gender: Some(decoded.gender),
                error: None,
            }),
        ),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(CheckIinResponse {
                valid: false,
                date: None,
                gender: None,
                error: Some(e.to_string()),
            }),
        ),
    }
}
