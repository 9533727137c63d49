use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_macros::{FromRequest, FromRequestParts};
use serde::Serialize;
use tracing::error;
use utoipa::ToResponse;

#[cfg(test)]
use serde::Deserialize;

/// Plain-text body sent when a todo with the requested ID is not stored
pub const NOT_FOUND_BODY: &str = "Not found";
/// Plain-text body sent for routes and methods the API does not serve
pub const ROUTE_NOT_FOUND_BODY: &str = "Not Found";

/// Contains diagnostic information about an API failure
#[derive(Serialize, Debug, ToResponse)]
#[cfg_attr(test, derive(Deserialize))]
#[response(examples(
    ("Internal Failure" = (
        summary = "Something unexpected went wrong inside the server (500)",
        value = json!({
            "error_code": "internal_error",
            "error_description": "Could not access data to complete your request",
            "extra_info": null
        })
    )),

    ("Invalid ID" = (
        summary = "The todo ID in the path was not a non-negative integer (400)",
        value = json!({
            "error_code": "invalid_id",
            "error_description": "The todo ID in the request path was not a valid identifier.",
            "extra_info": "Invalid URL: Cannot parse `abc` to a `u64`"
        })
    )),

    ("Malformed JSON" = (
        summary = "Invalid JSON passed to server (400)",
        value = json!({
            "error_code": "invalid_json",
            "error_description": "The passed request body contained malformed or unreadable JSON.",
            "extra_info": "Failed to deserialize the JSON body into the target type: missing field `description` at line 1 column 20"
        })
    ))
))]
pub struct BasicErrorResponse {
    pub error_code: String,
    pub error_description: String,
    pub extra_info: Option<String>,
}

/// Response type for unexpected failures, turning them into a 500 with a [BasicErrorResponse]
pub struct GenericErrorResponse(pub anyhow::Error);

impl IntoResponse for GenericErrorResponse {
    fn into_response(self) -> Response {
        error!("Encountered an unexpected error: {:#}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(BasicErrorResponse {
                error_code: "internal_error".into(),
                error_description: "Could not access data to complete your request".into(),
                extra_info: None,
            }),
        )
            .into_response()
    }
}

/// Response type for a todo which could not be found
pub struct NotFoundResponse;

impl IntoResponse for NotFoundResponse {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
    }
}

/// Fallback handler for any method or path the API does not serve
pub async fn route_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, ROUTE_NOT_FOUND_BODY)
}

/// Wrapper for [axum::Json] which customizes the error response to use our
/// data structure for API errors
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonErrorResponse))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Response type representing JSON parse errors
pub struct JsonErrorResponse {
    parse_problem: String,
}

impl From<JsonRejection> for JsonErrorResponse {
    fn from(value: JsonRejection) -> Self {
        JsonErrorResponse {
            parse_problem: value.body_text(),
        }
    }
}

impl IntoResponse for JsonErrorResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            axum::Json(BasicErrorResponse {
                error_code: "invalid_json".into(),
                error_description:
                    "The passed request body contained malformed or unreadable JSON.".into(),
                extra_info: Some(self.parse_problem),
            }),
        )
            .into_response()
    }
}

/// Wrapper for [axum::extract::Path] so identifiers which fail to parse are reported with our
/// data structure for API errors, distinct from a well-formed ID that isn't stored
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(PathErrorResponse))]
pub struct Path<T>(pub T);

/// Response type representing path parameters that could not be parsed
pub struct PathErrorResponse {
    parse_problem: String,
}

impl From<PathRejection> for PathErrorResponse {
    fn from(value: PathRejection) -> Self {
        PathErrorResponse {
            parse_problem: value.body_text(),
        }
    }
}

impl IntoResponse for PathErrorResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            axum::Json(BasicErrorResponse {
                error_code: "invalid_id".into(),
                error_description: "The todo ID in the request path was not a valid identifier."
                    .into(),
                extra_info: Some(self.parse_problem),
            }),
        )
            .into_response()
    }
}
