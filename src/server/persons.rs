use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::{
    directory::{Contact, Directory},
    server::ServerError,
};

pub async fn list(Extension(directory): Extension<&'static Directory>) -> Json<Vec<Contact>> {
    Json(directory.list())
}

pub async fn get_by_id(
    Path(id): Path<String>,
    Extension(directory): Extension<&'static Directory>,
) -> Result<Json<Contact>, ServerError> {
    let contact = directory.get_by_id(&id)?;

    Ok(Json(contact))
}

pub async fn delete_by_id(
    Path(id): Path<String>,
    Extension(directory): Extension<&'static Directory>,
) -> StatusCode {
    directory.delete_by_id(&id);

    StatusCode::NO_CONTENT
}

pub async fn create(
    Extension(directory): Extension<&'static Directory>,
    body: Result<Json<NewContact>, JsonRejection>,
) -> Result<Json<Contact>, ServerError> {
    // Bodies which cannot be parsed are treated as lacking both fields.
    let body = match body {
        Ok(Json(body)) => body,
        Err(err) => {
            tracing::debug!("Failed to parse contact: {}", err);

            NewContact::default()
        }
    };

    tracing::debug!("Creating contact {:?}", body);

    let contact = directory.create(body.name.as_deref(), body.number.as_deref())?;

    Ok(Json(contact))
}

#[derive(Debug, Default, Deserialize)]
pub struct NewContact {
    name: Option<String>,
    number: Option<String>,
}
