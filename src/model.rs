//! Book resource: stored row, raw request body, and validated payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the `Books` table. Column names follow the existing store schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[sqlx(rename = "ID")]
    pub id: i32,
    #[sqlx(rename = "Title")]
    pub title: String,
    #[sqlx(rename = "Author")]
    pub author: String,
    #[sqlx(rename = "YearPubished")]
    pub year_published: i32,
}

/// Request body as sent by the client. Every field is optional so that a
/// missing or null field surfaces as a validation error naming the field.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year_published: Option<i32>,
}

/// Validated create/update payload. `id` is `None` when the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub id: Option<i32>,
    pub title: String,
    pub author: String,
    pub year_published: i32,
}

impl NewBook {
    /// The row this payload becomes once stored under `id`.
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            year_published: self.year_published,
        }
    }
}
