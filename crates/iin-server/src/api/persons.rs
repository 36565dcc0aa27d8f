use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use iin_persons::{Person, PersonDirectory};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub iin: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePersonResponse {
    pub success: bool,
}

/// POST /people/info
pub async fn create_person(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePersonRequest>,
) -> Result<(StatusCode, Json<CreatePersonResponse>), ApiError> {
    state
        .persons
        .create(Person {
            iin: req.iin,
            name: req.name,
            phone: req.phone,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CreatePersonResponse { success: true })))
}

/// GET /people/info/:iin
pub async fn get_person(
    State(state): State<Arc<AppState>>,
    Path(iin): Path<String>,
) -> Result<Json<Person>, ApiError> {
    let person = state.persons.get(&iin).await?;
    Ok(Json(person))
}

/// GET /people/info/phone/:name
pub async fn search_persons(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let persons = state.persons.find_by_name(&name).await?;
    Ok(Json(persons))
}
