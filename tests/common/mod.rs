//! In-memory `BookGateway` doubles and request helpers for router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use books_api::migration::seed_books;
use books_api::{app, AppError, AppState, Book, BookGateway, NewBook};
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tower::ServiceExt;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Book>,
    next_id: i32,
}

/// Behaves like the Postgres gateway: identity ids, conflicts on duplicate ids,
/// NotFound on update/delete of a missing row.
#[derive(Default)]
pub struct MemoryBookGateway {
    table: Mutex<Table>,
}

impl MemoryBookGateway {
    pub fn seeded() -> Self {
        let rows: BTreeMap<i32, Book> = seed_books().into_iter().map(|b| (b.id, b)).collect();
        let next_id = rows.keys().max().copied().unwrap_or(0) + 1;
        MemoryBookGateway {
            table: Mutex::new(Table { rows, next_id }),
        }
    }
}

#[async_trait]
impl BookGateway for MemoryBookGateway {
    async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Book>, AppError> {
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn create(&self, book: &NewBook) -> Result<Book, AppError> {
        let mut table = self.table.lock().await;
        let id = match book.id {
            Some(id) if table.rows.contains_key(&id) => {
                return Err(AppError::Conflict(format!("book {} already exists", id)))
            }
            Some(id) => id,
            None => {
                table.next_id = table.next_id.max(1);
                while table.rows.contains_key(&table.next_id) {
                    table.next_id += 1;
                }
                let id = table.next_id;
                table.next_id += 1;
                id
            }
        };
        let stored = book.clone().into_book(id);
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i32, book: &NewBook) -> Result<(), AppError> {
        let mut table = self.table.lock().await;
        let row = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("book {}", id)))?;
        *row = book.clone().into_book(id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.table
            .lock()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("book {}", id)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Every call fails as if the store were unreachable.
pub struct UnreachableGateway;

#[async_trait]
impl BookGateway for UnreachableGateway {
    async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _id: i32) -> Result<Option<Book>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _book: &NewBook) -> Result<Book, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _id: i32, _book: &NewBook) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i32) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
}

pub fn router<G: BookGateway + 'static>(gateway: G) -> Router {
    router_with_limit(gateway, 64 * 1024)
}

pub fn router_with_limit<G: BookGateway + 'static>(gateway: G, body_limit_bytes: usize) -> Router {
    app(AppState::new(gateway), body_limit_bytes)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Send one request through the router. `body` is sent raw with a JSON content type.
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };
    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    TestResponse { status, headers, body }
}

pub async fn send_json(router: &Router, method: Method, uri: &str, body: &Value) -> TestResponse {
    send(router, method, uri, Some(&body.to_string())).await
}
