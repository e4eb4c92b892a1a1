/// DynamoDB接続設定
use aws_sdk_dynamodb::Client as DynamoDbClient;

use super::book_repository::BOOK_TABLE_NAME;

/// テーブル名とクライアントを持つDynamoDB設定
///
/// クライアントはプロセス起動時に一度だけ作成し、全呼び出しで共有する。
/// 認証情報・リージョン・エンドポイントはaws-configのデフォルトチェーンに委譲し、
/// このクレート自身は環境変数を読まない。
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// 書籍テーブル名
    books_table: String,
}

impl DynamoDbConfig {
    /// 環境からAWS設定を読み込み、書籍テーブル用のDynamoDbConfigを作成
    pub async fn from_env() -> Self {
        // 環境からAWS設定を読み込み（認証情報、リージョンなど）
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        // AWS設定からDynamoDBクライアントを作成
        let client = DynamoDbClient::new(&aws_config);

        Self {
            client,
            books_table: BOOK_TABLE_NAME.to_string(),
        }
    }

    /// 明示的な値で新しいDynamoDbConfigを作成（テスト用）
    pub fn new(client: DynamoDbClient, books_table: String) -> Self {
        Self {
            client,
            books_table,
        }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// 書籍テーブル名を取得
    pub fn books_table(&self) -> &str {
        &self.books_table
    }
}
