//! Book CRUD handlers: list, read, create, update, delete.
//! Each handler makes exactly one gateway call.

use crate::error::{AppError, ErrorBody};
use crate::extractors::BookBody;
use crate::model::{Book, BookInput};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

/// Collection path; `Location` headers on create point below it.
pub const BOOKS_PATH: &str = "/books";

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = [Book]),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = state.books.list_all().await?;
    Ok((StatusCode::OK, Json(books)))
}

#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = Book),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No book with this id", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let book = state
        .books
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("book {}", id)))?;
    Ok((StatusCode::OK, Json(book)))
}

#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created; Location points at it", body = Book),
        (status = 400, description = "Null, malformed or incomplete body", body = ErrorBody),
        (status = 409, description = "A book with the supplied id exists", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    BookBody(input): BookBody,
) -> Result<impl IntoResponse, AppError> {
    let new_book = RequestValidator::validate(input)?;
    let book = state.books.create(&new_book).await?;
    tracing::info!(id = book.id, "book created");
    let location = format!("{}/{}", BOOKS_PATH, book.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(book)))
}

#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    request_body = BookInput,
    responses(
        (status = 204, description = "Book overwritten"),
        (status = 400, description = "Invalid body or body id differs from path id", body = ErrorBody),
        (status = 404, description = "No book with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    BookBody(input): BookBody,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let new_book = RequestValidator::validate(input)?;
    RequestValidator::check_path_id(id, &new_book)?;
    state.books.update(id, &new_book).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "No book with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.books.delete(id).await?;
    tracing::info!(id, "book deleted");
    Ok(StatusCode::NO_CONTENT)
}
