//! Books API: CRUD REST service for a single `Books` table on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Book, BookInput, NewBook};
pub use openapi::ApiDoc;
pub use routes::{app, book_routes, common_routes, common_routes_with_ready};
pub use service::{BookGateway, PgBookGateway};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists};
