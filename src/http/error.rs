//! AppError → HTTP response.

use crate::error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::NotFound(_) | AppError::NoNextPage | AppError::NoPreviousPage => {
            StatusCode::NOT_FOUND
        }
        AppError::Validation(_)
        | AppError::MissingOrderKey(_)
        | AppError::UnknownColumn(_)
        | AppError::InvalidDirection(_) => StatusCode::BAD_REQUEST,
        AppError::Conflict(_) => StatusCode::CONFLICT,
        AppError::Db(_)
        | AppError::CountQueryFailed(_)
        | AppError::RangeQueryFailed(_)
        | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            log::error!("{}", self);
        } else if self.is_page_boundary() {
            log::debug!("{}", self);
        } else {
            log::warn!("request rejected: {}", self);
        }
        (status, Json(self.to_serde())).into_response()
    }
}
