/// 書籍登録HTTP Lambdaエントリポイント
///
/// API Gateway / Lambda Function URL経由のHTTPリクエストを受け取り、
/// 書籍レコードをDynamoDBの書籍テーブルに登録する。
use book_api::application::CreateBookHandler;
use book_api::infrastructure::{DynamoBookRepository, DynamoDbConfig, init_logging};
use lambda_http::{Error, Request, run, service_fn};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // DynamoDBクライアントはコールドスタート時に一度だけ作成し、warm start間で再利用する
    let config = DynamoDbConfig::from_env().await;
    let book_repo = DynamoBookRepository::from_config(&config);
    let handler = CreateBookHandler::new(book_repo);

    info!(table_name = config.books_table(), "書籍登録Lambda関数を初期化");

    run(service_fn(|request: Request| handler.handle(request))).await
}
