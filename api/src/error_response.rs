use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use grounded_search::QueryError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

pub struct ApiError(pub QueryError);

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            QueryError::Unauthenticated => StatusCode::UNAUTHORIZED,
            QueryError::InvalidArgument => StatusCode::BAD_REQUEST,
            QueryError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            QueryError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.0.code(),
            message: self.0.to_string(),
            upstream_status: self.0.upstream_status(),
        };
        (self.status(), Json(body)).into_response()
    }
}
