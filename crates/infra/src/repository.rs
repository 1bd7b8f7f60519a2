//! # リポジトリ実装
//!
//! タスクの永続化インターフェースと PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **トレイト経由の注入**: ユースケース層は `Arc<dyn TaskRepository>` のみに依存する
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **差し替え可能**: 同じトレイトをインメモリ実装（[`crate::memory`]）も実装する

pub mod task_repository;

pub use task_repository::{PostgresTaskRepository, TaskRepository};
