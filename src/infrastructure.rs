// Infrastructure layer modules
pub mod book_repository;
pub mod config;
pub mod logging;

// Re-exports
pub use book_repository::{BOOK_TABLE_NAME, BookRepository, DynamoBookRepository, RepositoryError};
pub use config::DynamoDbConfig;
pub use logging::init_logging;
