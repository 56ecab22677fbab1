use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::EmployerId;
use super::repository::CandidateRepository;
use super::service::CandidateExporter;

/// Router builder exposing the employer candidate download.
pub fn candidate_export_router<R>(exporter: Arc<CandidateExporter<R>>) -> Router
where
    R: CandidateRepository + 'static,
{
    Router::new()
        .route(
            "/export-candidates/:employer_id",
            get(export_candidates_handler::<R>),
        )
        .with_state(exporter)
}

pub(crate) async fn export_candidates_handler<R>(
    State(exporter): State<Arc<CandidateExporter<R>>>,
    Path(employer_id): Path<i64>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match exporter.export(EmployerId(employer_id)).await {
        Ok(export) => {
            let disposition = match HeaderValue::from_str(&export.content_disposition()) {
                Ok(value) => value,
                Err(err) => return internal_error(err.to_string()),
            };
            let content_type = match HeaderValue::from_str(export.content_type.as_ref()) {
                Ok(value) => value,
                Err(err) => return internal_error(err.to_string()),
            };

            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                export.body,
            )
                .into_response()
        }
        Err(err) => internal_error(err.to_string()),
    }
}

fn internal_error(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
