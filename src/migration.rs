//! Schema setup for the books table, with its seed rows.
//! Run once at startup before serving; the request path never touches DDL.

use crate::error::AppError;
use crate::model::Book;
use crate::service::BOOKS_TABLE;
use sqlx::PgPool;

/// Rows present after the first schema setup.
pub const SEED_BOOKS: &[(i32, &str, &str, i32)] = &[
    (1, "To Kill a Mockingbird", "Harper Lee", 1960),
    (2, "1984", "George Orwell", 1949),
    (3, "The Great Gatsby", "F. Scott Fitzgerald", 1925),
];

pub fn seed_books() -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .map(|&(id, title, author, year_published)| Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year_published,
        })
        .collect()
}

fn create_table_sql() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            "ID" INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
            "Title" TEXT NOT NULL,
            "Author" TEXT NOT NULL,
            "YearPubished" INTEGER NOT NULL
        )
        "#,
        BOOKS_TABLE
    )
}

/// Create the table if missing and insert the seed rows that are not already there.
/// Idempotent. Afterwards the identity sequence is moved past the highest id so
/// store-assigned ids do not collide with seeded or client-supplied ones.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query(&create_table_sql()).execute(&mut *tx).await?;

    let insert = format!(
        "INSERT INTO {} (\"ID\", \"Title\", \"Author\", \"YearPubished\") VALUES ($1, $2, $3, $4) ON CONFLICT (\"ID\") DO NOTHING",
        BOOKS_TABLE
    );
    let mut seeded = 0u64;
    for book in seed_books() {
        let result = sqlx::query(&insert)
            .bind(book.id)
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.year_published)
            .execute(&mut *tx)
            .await?;
        seeded += result.rows_affected();
    }

    let sync_sequence = format!(
        "SELECT setval(pg_get_serial_sequence('{table}', 'ID'), COALESCE((SELECT MAX(\"ID\") FROM {table}), 0) + 1, false)",
        table = BOOKS_TABLE
    );
    sqlx::query(&sync_sequence).execute(&mut *tx).await?;

    tx.commit().await?;
    tracing::info!(seeded, "books schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_three_books_with_ids_one_to_three() {
        let ids: Vec<i32> = seed_books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(seed_books()[1].title, "1984");
    }

    #[test]
    fn table_keeps_store_column_names() {
        let ddl = create_table_sql();
        assert!(ddl.contains("\"Books\""));
        assert!(ddl.contains("\"YearPubished\" INTEGER NOT NULL"));
        assert!(ddl.contains("GENERATED BY DEFAULT AS IDENTITY"));
    }
}
