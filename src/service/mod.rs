//! Persistence gateway and request validation.

mod gateway;
mod postgres;
mod validation;
pub use gateway::BookGateway;
pub use postgres::{PgBookGateway, BOOKS_TABLE};
pub use validation::RequestValidator;
