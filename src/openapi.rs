//! OpenAPI document for the books resource, served at `GET /openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::books;
use crate::model::{Book, BookInput};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Books API", description = "CRUD over the Books table"),
    paths(books::list, books::read, books::create, books::update, books::delete),
    components(schemas(Book, BookInput, ErrorBody, ErrorDetail)),
    tags((name = "books", description = "Book records"))
)]
pub struct ApiDoc;
