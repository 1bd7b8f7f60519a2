//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はサービス側の責務（shared に axum 依存を入れない）
//! - よく使うエラー種別は便利コンストラクタで提供し、URI のハードコードを排除
//! - バリデーションエラーのみ `errors` にフィールド単位の詳細を載せる

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://taskboard.example.com/errors";

/// フィールド単位のエラー詳細
///
/// どのフィールドが、どの理由で不正だったかを表す。
/// `field` はリクエストボディのキー名。ボディ全体が不正な場合は空文字列。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
   pub field:   String,
   /// 機械可読なエラーコード（`required`, `invalid_type`, `too_small`）
   pub code:    String,
   pub message: String,
}

impl FieldError {
   pub fn new(
      field: impl Into<String>,
      code: impl Into<String>,
      message: impl Into<String>,
   ) -> Self {
      Self {
         field:   field.into(),
         code:    code.into(),
         message: message.into(),
      }
   }
}

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// `type` フィールドは URI で問題の種類を識別する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub errors:     Option<Vec<FieldError>>,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   ///
   /// `error_type_suffix` はベース URI に付加される（例: `"not-found"`）。
   pub fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
         errors: None,
      }
   }

   /// 400 Bad Request
   pub fn bad_request(detail: impl Into<String>) -> Self {
      Self::new("bad-request", "Bad Request", 400, detail)
   }

   /// 404 Not Found
   pub fn not_found(detail: impl Into<String>) -> Self {
      Self::new("not-found", "Not Found", 404, detail)
   }

   /// 400 Validation Error
   ///
   /// 不正だったフィールドの一覧を `errors` に載せる。
   pub fn validation_error(detail: impl Into<String>, errors: Vec<FieldError>) -> Self {
      Self {
         errors: Some(errors),
         ..Self::new("validation-error", "Validation Error", 400, detail)
      }
   }

   /// 500 Internal Server Error
   ///
   /// detail は固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new(
         "internal-error",
         "Internal Server Error",
         500,
         "内部エラーが発生しました",
      )
   }
}
