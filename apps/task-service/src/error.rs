//! # Task Service エラー定義
//!
//! Task Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ハンドラとユースケースはすべて `Result<_, CoreError>` を返し、
//! HTTP ステータスとボディへの変換はこのモジュールの [`IntoResponse`] 実装だけが行う。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use taskboard_domain::task::ValidationErrors;
use taskboard_shared::ErrorResponse;
use thiserror::Error;

/// Task Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
   /// リクエストボディのスキーマ検証に失敗した
   #[error("バリデーションエラー: {0}")]
   Validation(#[from] ValidationErrors),

   /// リクエストボディを JSON として読めない
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] taskboard_infra::InfraError),
}

impl IntoResponse for CoreError {
   fn into_response(self) -> Response {
      let body = match self {
         CoreError::Validation(errors) => {
            ErrorResponse::validation_error(errors.to_string(), errors.into_errors())
         }
         CoreError::BadRequest(msg) => ErrorResponse::bad_request(msg),
         CoreError::NotFound(msg) => ErrorResponse::not_found(msg),
         CoreError::Database(e) => {
            tracing::error!(
               error.kind = "database",
               span_trace = %e.span_trace(),
               "データベースエラー: {}",
               e
            );
            ErrorResponse::internal_error()
         }
      };

      let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
      (status, Json(body)).into_response()
   }
}
