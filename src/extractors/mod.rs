pub mod book;

pub use book::BookBody;
