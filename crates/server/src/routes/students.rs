use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use models::{Student, StudentInput};
use service::errors::ServiceError;
use tracing::info;

use crate::errors::ApiError;
use crate::observability::STUDENTS_CREATED_TOTAL;
use crate::routes::ServerState;
use crate::views;

/// List all students as JSON, or as an HTML page when the client asks for one.
#[utoipa::path(get, path = "/students", tag = "students", responses(
    (status = 200, description = "All students", body = [crate::openapi::StudentDoc]),
    (status = 502, description = "Seed source unavailable", body = crate::openapi::ErrorDoc),
))]
pub async fn list(State(state): State<ServerState>, headers: HeaderMap) -> Result<Response, ApiError> {
    let students = state.store.list().await?;
    if views::prefers_html(&headers) {
        return Ok(views::students_page(&students));
    }
    Ok(Json(students).into_response())
}

#[utoipa::path(get, path = "/students/{id}", tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found", body = crate::openapi::StudentDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No student with this id", body = crate::openapi::ErrorDoc),
        (status = 502, description = "Seed source unavailable", body = crate::openapi::ErrorDoc),
    ))]
pub async fn get(State(state): State<ServerState>, Path(raw): Path<String>) -> Result<Json<Student>, ApiError> {
    let id: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request(format!("invalid student id: {raw}")))?;
    let student = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(&format!("student {id}")))?;
    Ok(Json(student))
}

/// Create a student; answers 201 with a `Location` header pointing at it.
#[utoipa::path(post, path = "/students", tag = "students", request_body = crate::openapi::StudentInputDoc, responses(
    (status = 201, description = "Student created", body = crate::openapi::StudentDoc),
    (status = 400, description = "Missing name or id, or malformed body", body = crate::openapi::ErrorDoc),
    (status = 409, description = "Id already taken", body = crate::openapi::ErrorDoc),
    (status = 502, description = "Seed source unavailable", body = crate::openapi::ErrorDoc),
))]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let student = state.store.add(input).await?;
    STUDENTS_CREATED_TOTAL.inc();
    info!(id = student.id, "created student");
    let location = format!("/students/{}", student.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(student)))
}
