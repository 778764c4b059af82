//! `BookGateway` over a PostgreSQL pool.

use crate::error::AppError;
use crate::model::{Book, NewBook};
use crate::service::BookGateway;
use async_trait::async_trait;
use sqlx::PgPool;

/// Table and column names of the existing store, quoted for PostgreSQL.
pub const BOOKS_TABLE: &str = "\"Books\"";
const SELECT_COLUMNS: &str = "\"ID\", \"Title\", \"Author\", \"YearPubished\"";

#[derive(Clone)]
pub struct PgBookGateway {
    pool: PgPool,
}

impl PgBookGateway {
    pub fn new(pool: PgPool) -> Self {
        PgBookGateway { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BookGateway for PgBookGateway {
    async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        let sql = format!("SELECT {} FROM {}", SELECT_COLUMNS, BOOKS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Book>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Book>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE \"ID\" = $1", SELECT_COLUMNS, BOOKS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, book: &NewBook) -> Result<Book, AppError> {
        let inserted = match book.id {
            Some(id) => {
                let sql = format!(
                    "INSERT INTO {} (\"ID\", \"Title\", \"Author\", \"YearPubished\") VALUES ($1, $2, $3, $4) RETURNING {}",
                    BOOKS_TABLE, SELECT_COLUMNS
                );
                tracing::debug!(sql = %sql, id, "query");
                sqlx::query_as::<_, Book>(&sql)
                    .bind(id)
                    .bind(&book.title)
                    .bind(&book.author)
                    .bind(book.year_published)
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                let sql = format!(
                    "INSERT INTO {} (\"Title\", \"Author\", \"YearPubished\") VALUES ($1, $2, $3) RETURNING {}",
                    BOOKS_TABLE, SELECT_COLUMNS
                );
                tracing::debug!(sql = %sql, "query");
                sqlx::query_as::<_, Book>(&sql)
                    .bind(&book.title)
                    .bind(&book.author)
                    .bind(book.year_published)
                    .fetch_one(&self.pool)
                    .await
            }
        };
        inserted.map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(format!("book {} already exists", book.id.unwrap_or_default()))
            }
            other => AppError::Db(other),
        })
    }

    async fn update(&self, id: i32, book: &NewBook) -> Result<(), AppError> {
        let sql = format!(
            "UPDATE {} SET \"Title\" = $2, \"Author\" = $3, \"YearPubished\" = $4 WHERE \"ID\" = $1",
            BOOKS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.year_published)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("book {}", id)));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE \"ID\" = $1", BOOKS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("book {}", id)));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
