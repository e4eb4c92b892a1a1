/// 書籍レコードのドメインモデル
///
/// 呼び出し元から受け取る入力（BookDraft）と、
/// サーバー側でIDを付与した永続化対象のレコード（Book）を定義する。
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// 書籍ID
///
/// サーバー側でのみ生成される。呼び出し元の入力からは決して導出しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// 新しいランダムなID（UUID v4）を生成
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 文字列表現を取得
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 呼び出し元が指定する書籍情報
///
/// 値の検証は行わない。欠落・不正なフィールドは空文字列として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    /// 著者名
    pub author: String,
    /// 書籍タイトル
    pub name: String,
}

impl BookDraft {
    /// 新しいBookDraftを作成
    pub fn new(author: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            name: name.into(),
        }
    }

    /// リクエストボディ（生バイト列）からBookDraftをデコード
    ///
    /// # 戻り値
    /// * 空ボディの場合は`Ok(BookDraft::default())`
    /// * JSONとして解析できた場合は`Ok(BookDraft)`（文字列でないフィールドは空文字列）
    /// * JSONとして解析できない場合は`Err(serde_json::Error)`
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_value(&value))
    }

    /// JSON値からBookDraftを作成
    ///
    /// オブジェクトでない値、文字列でないフィールドはすべて空文字列になる。
    pub fn from_value(value: &Value) -> Self {
        Self {
            author: string_field(value, "author"),
            name: string_field(value, "name"),
        }
    }
}

/// 完全一致するキーを優先し、なければ大文字小文字を無視して一致するキーを使う
fn string_field(value: &Value, key: &str) -> String {
    let Some(object) = value.as_object() else {
        return String::new();
    };

    object
        .get(key)
        .or_else(|| {
            object
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// 永続化・レスポンス対象の書籍レコード
///
/// JSON表現: `{"id": string, "author": string, "name": string}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// サーバー生成の書籍ID（パーティションキー）
    pub id: BookId,
    /// 著者名
    pub author: String,
    /// 書籍タイトル
    pub name: String,
}

impl Book {
    /// 指定したIDとBookDraftからBookを作成
    pub fn new(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            author: draft.author,
            name: draft.name,
        }
    }

    /// 新しいIDを生成してBookDraftからBookを作成
    pub fn from_draft(draft: BookDraft) -> Self {
        Self::new(BookId::generate(), draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    // ==================== BookIdテスト ====================

    #[test]
    fn test_generate_returns_valid_uuid_v4() {
        let id = BookId::generate();

        let parsed = Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_generate_is_unique() {
        let ids: HashSet<BookId> = (0..1000).map(|_| BookId::generate()).collect();

        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_book_id_display() {
        let id = BookId::generate();

        assert_eq!(id.to_string(), id.as_str());
    }

    // ==================== BookDraftデコードテスト ====================

    #[test]
    fn test_from_body_valid_json() {
        let draft = BookDraft::from_body(br#"{"author":"Ursula K. Le Guin","name":"The Dispossessed"}"#)
            .unwrap();

        assert_eq!(draft.author, "Ursula K. Le Guin");
        assert_eq!(draft.name, "The Dispossessed");
    }

    #[test]
    fn test_from_body_ignores_extra_fields() {
        let draft = BookDraft::from_body(
            br#"{"id":"caller-supplied","author":"a","name":"n","year":1974}"#,
        )
        .unwrap();

        assert_eq!(draft, BookDraft::new("a", "n"));
    }

    #[test]
    fn test_from_body_missing_fields_become_empty() {
        let draft = BookDraft::from_body(br#"{"author":"only author"}"#).unwrap();

        assert_eq!(draft.author, "only author");
        assert_eq!(draft.name, "");
    }

    #[test]
    fn test_from_body_non_string_fields_become_empty() {
        let draft = BookDraft::from_body(br#"{"author":42,"name":null}"#).unwrap();

        assert_eq!(draft, BookDraft::default());
    }

    #[test]
    fn test_from_body_non_object_becomes_empty() {
        let draft = BookDraft::from_body(br#"["author","name"]"#).unwrap();

        assert_eq!(draft, BookDraft::default());
    }

    #[test]
    fn test_from_body_keys_match_case_insensitively() {
        let draft = BookDraft::from_body(br#"{"Author":"A","NAME":"N"}"#).unwrap();

        assert_eq!(draft, BookDraft::new("A", "N"));
    }

    #[test]
    fn test_from_body_exact_key_takes_precedence() {
        let draft = BookDraft::from_body(br#"{"Name":"other","name":"exact"}"#).unwrap();

        assert_eq!(draft.name, "exact");
    }

    #[test]
    fn test_from_body_invalid_utf8_is_error() {
        let mut body = br#"{"author":"ok","name":""#.to_vec();
        body.push(0xff);
        body.extend_from_slice(br#""}"#);

        assert!(BookDraft::from_body(&body).is_err());
    }

    #[test]
    fn test_from_body_empty_body() {
        let draft = BookDraft::from_body(b"").unwrap();

        assert_eq!(draft, BookDraft::default());
    }

    #[test]
    fn test_from_body_malformed_json_is_error() {
        let result = BookDraft::from_body(br#"{"author": "unterminated"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_from_body_preserves_unicode_verbatim() {
        let draft = BookDraft::from_body(r#"{"author":"夏目漱石","name":"吾輩は猫である"}"#.as_bytes())
            .unwrap();

        assert_eq!(draft.author, "夏目漱石");
        assert_eq!(draft.name, "吾輩は猫である");
    }

    // ==================== Bookテスト ====================

    #[test]
    fn test_from_draft_keeps_caller_fields() {
        let book = Book::from_draft(BookDraft::new("author", "title"));

        assert_eq!(book.author, "author");
        assert_eq!(book.name, "title");
        assert!(!book.id.as_str().is_empty());
    }

    #[test]
    fn test_from_draft_generates_different_ids() {
        let first = Book::from_draft(BookDraft::new("a", "n"));
        let second = Book::from_draft(BookDraft::new("a", "n"));

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_book_json_shape() {
        let id = BookId::generate();
        let book = Book::new(id.clone(), BookDraft::new("author", "title"));

        let value = serde_json::to_value(&book).unwrap();

        assert_eq!(
            value,
            json!({
                "id": id.as_str(),
                "author": "author",
                "name": "title"
            })
        );
    }
}
