use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::{Caller, CallerRole, ProfileUpdate, ScholarshipDraft, ScholarshipId, UserId};
use super::repository::{ProfileRepository, RepositoryError, ScholarshipRepository};
use super::service::{CatalogService, CatalogServiceError};

/// Router builder exposing the catalog and profile endpoints. Caller identity
/// arrives from the upstream auth middleware as `x-user-id` / `x-user-role`
/// headers.
pub fn catalog_router<S, P>(service: Arc<CatalogService<S, P>>) -> Router
where
    S: ScholarshipRepository + 'static,
    P: ProfileRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/scholarships",
            get(list_handler::<S, P>).post(create_handler::<S, P>),
        )
        .route(
            "/api/v1/scholarships/:id",
            get(detail_handler::<S, P>)
                .put(update_handler::<S, P>)
                .delete(delete_handler::<S, P>),
        )
        .route(
            "/api/v1/profile",
            get(profile_handler::<S, P>).put(update_profile_handler::<S, P>),
        )
        .with_state(service)
}

/// Trusts the identity headers the auth middleware injects; a request that
/// never passed that middleware has no user id and is rejected outright.
fn caller_from_headers(headers: &HeaderMap) -> Result<Caller, Response> {
    let user_id = headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok());

    let Some(user_id) = user_id else {
        let payload = json!({ "error": "Authentication required" });
        return Err((StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response());
    };

    let role = headers
        .get("x-user-role")
        .and_then(|value| value.to_str().ok())
        .map(CallerRole::from_header)
        .unwrap_or(CallerRole::Applicant);

    Ok(Caller {
        user_id: UserId(user_id),
        role,
    })
}

fn error_response(error: CatalogServiceError) -> Response {
    let status = match &error {
        CatalogServiceError::ProfileIncomplete => StatusCode::BAD_REQUEST,
        CatalogServiceError::Forbidden => StatusCode::FORBIDDEN,
        CatalogServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        CatalogServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn list_handler<S, P>(
    State(service): State<Arc<CatalogService<S, P>>>,
    headers: HeaderMap,
) -> Response
where
    S: ScholarshipRepository + 'static,
    P: ProfileRepository + 'static,
{
    let caller = match caller_from_headers(&headers) {
        Ok(caller) => caller,
        Err(response) => return response,
    };

    match service.list(&caller) {
        Ok(scholarships) => {
            let payload = json!({ "scholarships": scholarships });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn detail_handler<S, P>(
    State(service): State<Arc<CatalogService<S, P>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response
where
    S: ScholarshipRepository + 'static,
    P: ProfileRepository + 'static,
{
    let caller = match caller_from_headers(&headers) {
        Ok(caller) => caller,
        Err(response) => return response,
    };

    match service.get(&caller, ScholarshipId(id)) {
        Ok(view) => {
            let payload = json!({ "scholarship": view });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_handler<S, P>(
    State(service): State<Arc<CatalogService<S, P>>>,
    headers: HeaderMap,
    axum::Json(draft): axum::Json<ScholarshipDraft>,
) -> Response
where
    S: ScholarshipRepository + 'static,
    P: ProfileRepository + 'static,
{
    let caller = match caller_from_headers(&headers) {
        Ok(caller) => caller,
        Err(response) => return response,
    };

    match service.create(&caller, draft) {
        Ok(record) => {
            let payload = json!({ "message": "Created", "id": record.id });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<S, P>(
    State(service): State<Arc<CatalogService<S, P>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    axum::Json(draft): axum::Json<ScholarshipDraft>,
) -> Response
where
    S: ScholarshipRepository + 'static,
    P: ProfileRepository + 'static,
{
    let caller = match caller_from_headers(&headers) {
        Ok(caller) => caller,
        Err(response) => return response,
    };

    match service.update(&caller, ScholarshipId(id), draft) {
        Ok(()) => {
            let payload = json!({ "message": "Updated" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<S, P>(
    State(service): State<Arc<CatalogService<S, P>>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response
where
    S: ScholarshipRepository + 'static,
    P: ProfileRepository + 'static,
{
    let caller = match caller_from_headers(&headers) {
        Ok(caller) => caller,
        Err(response) => return response,
    };

    match service.deactivate(&caller, ScholarshipId(id)) {
        Ok(()) => {
            let payload = json!({ "message": "Deleted" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<S, P>(
    State(service): State<Arc<CatalogService<S, P>>>,
    headers: HeaderMap,
) -> Response
where
    S: ScholarshipRepository + 'static,
    P: ProfileRepository + 'static,
{
    let caller = match caller_from_headers(&headers) {
        Ok(caller) => caller,
        Err(response) => return response,
    };

    match service.profile(&caller) {
        Ok(profile) => {
            let payload = json!({ "profile": profile });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_profile_handler<S, P>(
    State(service): State<Arc<CatalogService<S, P>>>,
    headers: HeaderMap,
    axum::Json(update): axum::Json<ProfileUpdate>,
) -> Response
where
    S: ScholarshipRepository + 'static,
    P: ProfileRepository + 'static,
{
    let caller = match caller_from_headers(&headers) {
        Ok(caller) => caller,
        Err(response) => return response,
    };

    if let Err(details) = update.validate() {
        let payload = json!({ "error": "Validation failed", "details": details });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    }

    match service.update_profile(&caller, update) {
        Ok(()) => {
            let payload = json!({ "message": "Profile updated successfully" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}
