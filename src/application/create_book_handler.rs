/// 書籍登録ハンドラー
///
/// HTTPリクエストのボディから書籍情報を取り出し、サーバー側でIDを付与して
/// BookRepositoryに保存し、HTTPレスポンスを返す。
use lambda_http::http::StatusCode;
use lambda_http::http::header::{CONTENT_TYPE, HeaderValue};
use lambda_http::{Body, Request, Response};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{Book, BookDraft};
use crate::infrastructure::{BookRepository, RepositoryError};

/// 書籍登録のエラー型
///
/// どちらもレスポンスでは区別せず500として返す。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CreateBookError {
    /// 書籍レコードのDynamoDB属性への変換に失敗
    #[error("書籍のシリアライズに失敗: {0}")]
    Serialization(String),

    /// 書籍テーブルへの書き込みに失敗
    #[error("書籍の書き込みに失敗: {0}")]
    Storage(String),
}

impl From<RepositoryError> for CreateBookError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::SerializationError(msg) => CreateBookError::Serialization(msg),
            RepositoryError::WriteError(msg) => CreateBookError::Storage(msg),
        }
    }
}

/// 書籍登録リクエストを処理するハンドラー
pub struct CreateBookHandler<BR>
where
    BR: BookRepository,
{
    /// 書籍リポジトリ
    book_repo: BR,
}

impl<BR> CreateBookHandler<BR>
where
    BR: BookRepository,
{
    /// 新しいCreateBookHandlerを作成
    pub fn new(book_repo: BR) -> Self {
        Self { book_repo }
    }

    /// BookDraftに新しいIDを付与して保存する
    pub async fn create(&self, draft: BookDraft) -> Result<Book, CreateBookError> {
        let book = Book::from_draft(draft);

        self.book_repo.put(&book).await?;

        Ok(book)
    }

    /// HTTPリクエストを処理してレスポンスを生成
    ///
    /// # 処理フロー
    /// 1. ボディをBookDraftにデコード（失敗時は空フィールドで続行）
    /// 2. IDを生成してBookを構築し、書籍テーブルへ書き込み
    /// 3. 成功時は201とBookのJSON、失敗時は空ボディの500を返却
    ///
    /// メソッド、パス、ヘッダーは参照しない。
    pub async fn handle(&self, request: Request) -> Result<Response<Body>, lambda_http::Error> {
        let draft = BookDraft::from_body(request.body().as_ref()).unwrap_or_else(|err| {
            warn!(error = %err, "リクエストボディのデコード失敗、空フィールドで続行");
            BookDraft::default()
        });

        let book = match self.create(draft).await {
            Ok(book) => book,
            Err(err) => {
                error!(error = %err, "書籍登録失敗");
                return Self::internal_error().map_err(Into::into);
            }
        };

        info!(book_id = %book.id, "書籍登録完了");

        let json = match serde_json::to_string(&book) {
            Ok(json) => json,
            Err(err) => {
                error!(book_id = %book.id, error = %err, "レスポンスのシリアライズ失敗");
                return Self::internal_error().map_err(Into::into);
            }
        };

        Self::created(json).map_err(Into::into)
    }

    /// 201 Createdレスポンスを生成
    fn created(json: String) -> Result<Response<Body>, lambda_http::http::Error> {
        Response::builder()
            .status(StatusCode::CREATED)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(Body::Text(json))
    }

    /// 空ボディの500 Internal Server Errorレスポンスを生成
    fn internal_error() -> Result<Response<Body>, lambda_http::http::Error> {
        Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::Empty)
    }
}
