use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read candidate data")]
    DataUnavailable(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::DataUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Failure envelope mirrors the success shape so clients always get
        // data/total fields back.
        let body = json!({
            "success": false,
            "error": self.to_string(),
            "data": [],
            "total": 0,
        });

        (status, Json(body)).into_response()
    }
}
