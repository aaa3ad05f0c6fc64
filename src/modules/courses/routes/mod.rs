//! HTTP handlers for the courses module.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use courses_http::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::models::Course;
use super::store::{CourseStore, StoreError};

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::not_found(err.to_string())
    }
}

/// Route table for the courses module, bound to `store`.
pub fn router(store: Arc<CourseStore>) -> Router {
    Router::new()
        .route("/", get(serve_home))
        .route("/courses", get(list_courses))
        .route("/course", post(create_course))
        .route(
            "/course/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .with_state(store)
}

/// Decode a JSON body regardless of content type, exposing the parser error.
/// A JSON `null` decodes to the zero value.
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|err| AppError::bad_request(err.to_string()))
}

async fn serve_home() -> Html<&'static str> {
    Html("<h1>Welcome to api</h1>")
}

async fn list_courses(State(store): State<Arc<CourseStore>>) -> Json<Vec<Course>> {
    tracing::debug!("listing all courses");
    Json(store.list().await)
}

async fn get_course(
    State(store): State<Arc<CourseStore>>,
    Path(id): Path<String>,
) -> Result<Json<Course>, AppError> {
    Ok(Json(store.get(&id).await?))
}

async fn create_course(
    State(store): State<Arc<CourseStore>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course: Course = parse_body(&body)?;
    if course.is_empty() {
        return Err(AppError::validation(
            vec![json!({"field": "coursename", "error": "required"})],
            "No data inside JSON",
        ));
    }

    let created = store.create(course).await;
    tracing::info!(course_id = %created.courseid, "course created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_course(
    State(store): State<Arc<CourseStore>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Course>, AppError> {
    let replacement: Course = parse_body(&body)?;
    let updated = store.update(&id, replacement).await?;
    tracing::info!(course_id = %id, "course updated");
    Ok(Json(updated))
}

async fn delete_course(
    State(store): State<Arc<CourseStore>>,
    Path(id): Path<String>,
) -> Result<Json<&'static str>, AppError> {
    store.delete(&id).await?;
    tracing::info!(course_id = %id, "course deleted");
    Ok(Json("Course deleted"))
}
