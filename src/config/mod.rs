//! Server configuration from environment (optionally seeded from a `.env` file).

mod env;

pub use env::*;
