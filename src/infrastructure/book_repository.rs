/// DynamoDBで書籍レコードを永続化するための書籍リポジトリ
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::operation::put_item::builders::PutItemFluentBuilder;
use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;

use crate::domain::Book;

use super::config::DynamoDbConfig;

/// 書籍テーブル名（固定）
pub const BOOK_TABLE_NAME: &str = "book";

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// レコードからDynamoDB属性への変換に失敗
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),
}

/// 書籍レコード永続化用トレイト
///
/// 実際のDynamoDB実装とテスト用モックを差し替えられるようにする。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 書籍レコードを無条件に書き込む（存在する場合は置き換え）
    ///
    /// # 戻り値
    /// * 成功時は`Ok(())`
    /// * 属性変換失敗時は`Err(RepositoryError::SerializationError)`
    /// * 書き込み失敗時は`Err(RepositoryError::WriteError)`
    async fn put(&self, book: &Book) -> Result<(), RepositoryError>;
}

/// BookRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoBookRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// 書籍テーブル名
    table_name: String,
}

impl DynamoBookRepository {
    /// 新しいDynamoBookRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - 書籍テーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// DynamoDbConfigから作成（クライアントは共有される）
    pub fn from_config(config: &DynamoDbConfig) -> Self {
        Self::new(config.client().clone(), config.books_table().to_string())
    }

    /// テーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// BookをDynamoDBの属性マップに変換
    fn to_item(book: &Book) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
        serde_dynamo::to_item(book).map_err(|e| RepositoryError::SerializationError(e.to_string()))
    }

    /// PutItemリクエストを組み立てる（送信はしない）
    ///
    /// 条件式は付けない。同じIDが存在すれば上書きされる。
    pub fn build_put_item(&self, book: &Book) -> Result<PutItemFluentBuilder, RepositoryError> {
        let item = Self::to_item(book)?;

        Ok(self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item)))
    }
}

#[async_trait]
impl BookRepository for DynamoBookRepository {
    async fn put(&self, book: &Book) -> Result<(), RepositoryError> {
        self.build_put_item(book)?
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(e.to_string()))?;

        Ok(())
    }
}
