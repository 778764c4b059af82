//! Request validation: null, missing and blank-field checks only.

use crate::error::AppError;
use crate::model::{BookInput, NewBook};
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Decode a JSON body into a `BookInput`. A null or non-object body is a bad request;
    /// a field of the wrong JSON type is a validation error.
    pub fn parse_body(body: Value) -> Result<BookInput, AppError> {
        match body {
            Value::Null => Err(AppError::BadRequest("body is required".into())),
            Value::Object(_) => {
                serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
            }
            _ => Err(AppError::BadRequest("body must be a JSON object".into())),
        }
    }

    /// All of title, author and yearPublished must be present and non-null, and the
    /// text fields must not be blank. An id of 0 means "let the store assign one".
    pub fn validate(input: BookInput) -> Result<NewBook, AppError> {
        let title = required_text("title", input.title)?;
        let author = required_text("author", input.author)?;
        let year_published = required("yearPublished", input.year_published)?;
        Ok(NewBook {
            id: input.id.filter(|id| *id != 0),
            title,
            author,
            year_published,
        })
    }

    /// Update may not move a row to another primary key.
    pub fn check_path_id(path_id: i32, book: &NewBook) -> Result<(), AppError> {
        match book.id {
            Some(body_id) if body_id != path_id => Err(AppError::BadRequest(format!(
                "body id {} does not match path id {}",
                body_id, path_id
            ))),
            _ => Ok(()),
        }
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

fn required_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    required(field, value.filter(|s| !s.trim().is_empty()))
}
