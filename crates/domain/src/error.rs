//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **HTTP ステータスへのマッピング**: API 層でステータスコードに変換する
//!
//! 「存在しない ID」はドメインではなくユースケース層で検出するため、
//! ここには含めない。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 値オブジェクトの生成時に入力値がルールに違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - タイトルが空文字列
    /// - 色が空文字列
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
