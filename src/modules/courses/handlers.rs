use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Html,
    Json,
};

use catalog_http::error::AppError;

use super::error::CourseError;
use super::models::{parse_id, Course, CourseInput};
use super::store::CourseStore;

const LOG_TARGET: &str = "catalog::courses";

/// Welcome banner served at `/`
pub async fn home() -> Html<&'static str> {
    Html("<h1>Welcome to Course Management System</h1>")
}

pub async fn list_courses(State(store): State<Arc<CourseStore>>) -> Json<Vec<Course>> {
    let courses = store.list().await;
    tracing::info!(target: LOG_TARGET, count = courses.len(), "list courses");
    Json(courses)
}

pub async fn get_course(
    State(store): State<Arc<CourseStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Course>, AppError> {
    tracing::info!(target: LOG_TARGET, id = %raw_id, "get course");

    let id = parse_id(&raw_id)?;
    let course = store.get(id).await.ok_or(CourseError::NotFound(id))?;
    Ok(Json(course))
}

pub async fn create_course(
    State(store): State<Arc<CourseStore>>,
    body: Bytes,
) -> Result<Json<Course>, AppError> {
    let input = CourseInput::parse(&body)?;
    let course = store.create(input).await;

    tracing::info!(target: LOG_TARGET, id = %course.id, name = %course.name, "course created");
    Ok(Json(course))
}

/// Replace the course's fields, keeping its id.
/// The payload is validated before the stored course is touched.
pub async fn replace_course(
    State(store): State<Arc<CourseStore>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Course>, AppError> {
    if body.is_empty() {
        return Err(CourseError::MissingBody.into());
    }
    let id = parse_id(&raw_id)?;
    let input = CourseInput::parse(&body)?;

    let course = store
        .replace(id, input)
        .await
        .ok_or(CourseError::NotFound(id))?;

    tracing::info!(target: LOG_TARGET, id = %course.id, "course replaced");
    Ok(Json(course))
}

pub async fn delete_course(
    State(store): State<Arc<CourseStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<&'static str>, AppError> {
    let id = parse_id(&raw_id)?;
    store.delete(id).await.ok_or(CourseError::NotFound(id))?;

    tracing::info!(target: LOG_TARGET, id = %id, "course deleted");
    Ok(Json("Deleted successfully"))
}
