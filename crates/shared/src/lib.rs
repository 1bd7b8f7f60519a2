//! # Taskboard 共有ユーティリティ
//!
//! このクレートは、Taskboard
//! プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, task-service）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える（axum には依存しない）

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::{ErrorResponse, FieldError};
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
