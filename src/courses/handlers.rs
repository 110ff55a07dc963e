use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    courses::dto::{
        required_text, CourseListResponse, CourseResponse, CreateCourseRequest,
        CreatedCourseResponse,
    },
    courses::repo::Course,
    error::{ApiError, ApiJson},
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/courses/:id", get(get_course))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/courses", post(create_course))
}

/// Open to everyone; storage order, no pagination.
#[instrument(skip(state))]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<CourseListResponse>, ApiError> {
    let courses = Course::list_all(&state.db).await?;
    Ok(Json(CourseListResponse { courses }))
}

#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = Course::find_by_id(&state.db, id).await?.ok_or_else(|| {
        warn!(%id, "course not found");
        ApiError::NotFound("Course not found.".into())
    })?;
    Ok(Json(CourseResponse { course }))
}

/// Requires an authenticated caller; the `AuthUser` argument is the gate.
#[instrument(skip(state, payload))]
pub async fn create_course(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(payload): ApiJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CreatedCourseResponse>), ApiError> {
    let (Some(title), Some(description)) = (
        required_text(payload.title),
        required_text(payload.description),
    ) else {
        return Err(ApiError::BadRequest(
            "Title and description are required.".into(),
        ));
    };

    let course = Course::create(
        &state.db,
        &title,
        &description,
        payload.image_url.as_deref(),
    )
    .await?;

    info!(course_id = %course.id, %user_id, "course created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedCourseResponse {
            message: "Course created successfully".into(),
            course,
        }),
    ))
}
