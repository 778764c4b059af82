//! Persistence gateway: typed CRUD over the books table.

use crate::error::AppError;
use crate::model::{Book, NewBook};
use async_trait::async_trait;

/// Data-access interface injected into the handlers through `AppState`.
///
/// Each call maps to exactly one statement against the store. Absence on read is
/// `Ok(None)`; absence on update or delete is `AppError::NotFound`.
#[async_trait]
pub trait BookGateway: Send + Sync {
    /// All rows in the store's natural order.
    async fn list_all(&self) -> Result<Vec<Book>, AppError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Book>, AppError>;

    /// Insert one row and return it as persisted (with the assigned id).
    async fn create(&self, book: &NewBook) -> Result<Book, AppError>;

    /// Overwrite title, author and year of the row with `id`.
    async fn update(&self, id: i32, book: &NewBook) -> Result<(), AppError>;

    async fn delete(&self, id: i32) -> Result<(), AppError>;

    /// Round-trip to the store, for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
