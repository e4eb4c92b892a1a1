// アプリケーション層モジュール
pub mod create_book_handler;

// 再エクスポート
pub use create_book_handler::{CreateBookError, CreateBookHandler};
