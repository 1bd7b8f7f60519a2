//! # Taskboard ドメイン層
//!
//! タスク管理の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`task::Task`]）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（[`task::TaskTitle`] など）
//! - **入力検証**: リクエストボディ（JSON）をドメイン型へ変換する境界
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! task-service → infra → domain → shared
//! ```
//!
//! ドメイン層は `shared` のみに依存し、インフラ層（DB）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 現在時刻の抽象化
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`task`] - タスクエンティティと入力スキーマ
//!
//! ## 使用例
//!
//! ```rust
//! use taskboard_domain::{DomainError, task::TaskTitle};
//!
//! let title = TaskTitle::new("牛乳を買う").unwrap();
//! assert_eq!(title.as_str(), "牛乳を買う");
//!
//! // 空文字列は拒否される
//! assert!(matches!(TaskTitle::new(""), Err(DomainError::Validation(_))));
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod task;

pub use error::DomainError;
