pub mod filters;
pub mod info;
pub mod persons;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::directory::{Directory, Error as DirectoryError};

pub fn router(directory: &'static Directory) -> Router {
    Router::new()
        .route("/api/persons", get(persons::list).post(persons::create))
        .route(
            "/api/persons/:id",
            get(persons::get_by_id).delete(persons::delete_by_id),
        )
        .route("/info", get(info::info))
        .layer(Extension(directory))
        .layer(CorsLayer::permissive())
}

#[derive(Debug)]
pub enum ServerError {
    BadRequest(&'static str),
    NotFound(&'static str),
    Internal(&'static str),
}

impl From<DirectoryError> for ServerError {
    fn from(err: DirectoryError) -> Self {
        let msg = err.message();

        match err {
            DirectoryError::MissingField | DirectoryError::DuplicateName => Self::BadRequest(msg),
            DirectoryError::NotFound => Self::NotFound(msg),
            DirectoryError::IdSpaceExhausted => Self::Internal(msg),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
