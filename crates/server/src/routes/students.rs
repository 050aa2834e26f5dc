use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, State},
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use service::student::domain::{student_url, DecoratedStudent, Student};
use tracing::{error, info, warn};

use crate::{errors::JsonApiError, routes::AppState};

/// Scheme and authority the client used to reach us, e.g. `http://localhost:8888`.
/// Empty when it cannot be determined, which yields relative links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(pub String);

#[async_trait]
impl FromRequestParts<AppState> for BaseUrl {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(public) = &state.public_url {
            return Ok(BaseUrl(public.clone()));
        }
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
            .or_else(|| parts.uri.authority().map(|a| a.to_string()));
        let Some(host) = host else {
            return Ok(BaseUrl(String::new()));
        };
        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|h| h.to_str().ok())
            .and_then(web_scheme)
            .or_else(|| parts.uri.scheme_str().and_then(web_scheme))
            .unwrap_or("http");
        Ok(BaseUrl(format!("{scheme}://{host}")))
    }
}

/// Only `http` and `https` may end up in links; anything else is ignored.
fn web_scheme(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("https") {
        Some("https")
    } else if raw.eq_ignore_ascii_case("http") {
        Some("http")
    } else {
        None
    }
}

#[utoipa::path(
    get, path = "/students", tag = "students",
    responses(
        (status = 200, description = "All students", body = [crate::openapi::DecoratedStudentDoc]),
        (status = 500, description = "Internal error", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn list(State(state): State<AppState>, BaseUrl(base): BaseUrl) -> Result<Json<Vec<DecoratedStudent>>, JsonApiError> {
    match state.students.list(&base).await {
        Ok(list) => { info!(count = list.len(), "list students"); Ok(Json(list)) }
        Err(e) => { error!(err = %e, "list students failed"); Err(JsonApiError::internal()) }
    }
}

#[utoipa::path(
    post, path = "/students", tag = "students",
    request_body = crate::openapi::StudentDoc,
    responses(
        (status = 201, description = "Created; Location points at the new student"),
        (status = 409, description = "Duplicate id", body = crate::openapi::ErrorResponseDoc),
        (status = 500, description = "Internal error", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    BaseUrl(base): BaseUrl,
    Json(input): Json<Student>,
) -> Result<Response, JsonApiError> {
    let id = input.id.clone();
    info!(student_id = %id, "student_create_request");

    match state.students.add(input).await {
        Ok(()) => {
            let location = HeaderValue::try_from(student_url(&base, &id)).map_err(|e| {
                error!(student_id = %id, err = %e, "location header not representable");
                JsonApiError::internal()
            })?;
            Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
        }
        Err(e) => {
            warn!(student_id = %id, err = %e, "create student failed");
            Err(e.into())
        }
    }
}

/// Absence and lookup failure are both answered with an empty 404.
#[utoipa::path(
    get, path = "/students/{id}", tag = "students",
    params(("id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::DecoratedStudentDoc),
        (status = 404, description = "Not found or lookup failed")
    )
)]
pub async fn get(State(state): State<AppState>, BaseUrl(base): BaseUrl, Path(id): Path<String>) -> Result<Json<DecoratedStudent>, StatusCode> {
    match state.students.fetch(&id, &base).await {
        Ok(Some(s)) => Ok(Json(s)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            warn!(student_id = %id, err = %e, "fetch student failed; answering 404");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_web_schemes_are_accepted() {
        assert_eq!(web_scheme("https"), Some("https"));
        assert_eq!(web_scheme(" HTTP "), Some("http"));
        assert_eq!(web_scheme("javascript"), None);
        assert_eq!(web_scheme("https://evil"), None);
    }
}
