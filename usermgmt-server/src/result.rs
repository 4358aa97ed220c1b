// File: usermgmt-server/src/result.rs

//! What a controller action can produce, and how errors reach the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use usermgmt_core::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<T> {
    /// 200 with the view model as JSON.
    View(T),
    /// 303 See Other.
    Redirect(String),
    NotFound,
}

impl<T> ActionResult<T> {
    pub fn redirect(to: &str) -> Self {
        ActionResult::Redirect(to.to_string())
    }

    pub fn into_view(self) -> Option<T> {
        match self {
            ActionResult::View(model) => Some(model),
            _ => None,
        }
    }
}

impl<T: Serialize> IntoResponse for ActionResult<T> {
    fn into_response(self) -> Response {
        match self {
            ActionResult::View(model) => (StatusCode::OK, Json(model)).into_response(),
            ActionResult::Redirect(to) => Redirect::to(&to).into_response(),
            ActionResult::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
            }
        }
    }
}

/// Wraps an unexpected service error so handlers can use `?`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) | Error::Parse(_) => StatusCode::BAD_REQUEST,
            Error::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    #[test]
    fn test_redirect_is_see_other() {
        let resp = ActionResult::<()>::redirect("/users").into_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/users");
    }

    #[test]
    fn test_not_found_status() {
        let resp = ActionResult::<()>::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (Error::NotFound("x".into()), StatusCode::NOT_FOUND),
            (Error::Conflict("x".into()), StatusCode::CONFLICT),
            (Error::Validation("x".into()), StatusCode::BAD_REQUEST),
            (
                Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError(err).into_response().status(), expected);
        }
    }
}
