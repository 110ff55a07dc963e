use serde::{Deserialize, Serialize};

use crate::courses::repo::Course;

/// Request body for course creation. Title and description are required but
/// arrive as options so their absence maps to 400, not a decode rejection.
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<Course>,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub course: Course,
}

#[derive(Debug, Serialize)]
pub struct CreatedCourseResponse {
    pub message: String,
    pub course: Course,
}

/// Trimmed, non-empty text or `None`.
pub(crate) fn required_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
