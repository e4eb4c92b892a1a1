// Domain layer modules
pub mod book;

// Re-exports
pub use book::{Book, BookDraft, BookId};
