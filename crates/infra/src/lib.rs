//! # Taskboard インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ実装**: タスクの永続化（PostgreSQL / インメモリ）
//!
//! ## 依存関係
//!
//! ```text
//! task-service → infra → domain → shared
//! ```
//!
//! ドメイン層はインフラ層に依存しない。
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`memory`] - インメモリのタスクストア
//! - [`repository`] - リポジトリトレイトと PostgreSQL 実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use taskboard_infra::{db, repository::{PostgresTaskRepository, TaskRepository}};
//!
//! async fn setup() -> Result<Arc<dyn TaskRepository>, Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/taskboard").await?;
//!     db::run_migrations(&pool).await?;
//!     Ok(Arc::new(PostgresTaskRepository::new(pool)))
//! }
//! ```

pub mod db;
pub mod error;
pub mod memory;
pub mod repository;

pub use error::InfraError;
pub use memory::InMemoryTaskRepository;
