//! # TaskRepository
//!
//! タスクの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **単一ステートメント**: 各操作は 1 クエリで完結し、トランザクションを張らない
//! - **影響行数で存在判定**: `update` / `delete` は対象行が無ければ `false` を返す。
//!   読み取りと書き込みの間に削除された場合も 404 として扱える
//! - **実行時チェックのクエリ**: `query_as` + [`TaskRow`] で行をマッピングする

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use taskboard_domain::task::{Task, TaskColor, TaskId, TaskTitle};
use uuid::Uuid;

use crate::error::InfraError;

/// タスクリポジトリトレイト
///
/// 一覧は常に `created_at` の降順（新しい順）で返す。
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 全タスクを新しい順で取得する
    async fn find_all(&self) -> Result<Vec<Task>, InfraError>;

    /// ID でタスクを検索する
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, InfraError>;

    /// タスクを挿入する
    async fn insert(&self, task: &Task) -> Result<(), InfraError>;

    /// タスクの可変フィールド（title, color, completed）を更新する
    ///
    /// 対象が存在しなかった場合は `false` を返す。
    async fn update(&self, task: &Task) -> Result<bool, InfraError>;

    /// タスクを削除する
    ///
    /// 対象が存在しなかった場合は `false` を返す。
    async fn delete(&self, id: &TaskId) -> Result<bool, InfraError>;

    /// ストアに到達できるか確認する（readiness 用）
    async fn ping(&self) -> Result<(), InfraError>;
}

/// `tasks` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id:         Uuid,
    title:      String,
    color:      String,
    completed:  bool,
    created_at: DateTime<Utc>,
}

impl TaskRow {
    /// ドメインエンティティに変換する
    ///
    /// スキーマ外から書き込まれた空文字列は不正なレコードとしてエラーにする。
    fn into_task(self) -> Result<Task, InfraError> {
        let id = self.id.to_string();
        let title = TaskTitle::new(self.title)
            .map_err(|e| InfraError::corrupt_record("Task", id.clone(), e.to_string()))?;
        let color = TaskColor::new(self.color)
            .map_err(|e| InfraError::corrupt_record("Task", id, e.to_string()))?;

        Ok(Task::from_db(
            TaskId::from_uuid(self.id),
            title,
            color,
            self.completed,
            self.created_at,
        ))
    }
}

/// PostgreSQL 実装の TaskRepository
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Task>, InfraError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, color, completed, created_at
            FROM tasks
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TaskRow::into_task).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, InfraError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, color, completed, created_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TaskRow::into_task).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %task.id()))]
    async fn insert(&self, task: &Task) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            INSERT INTO tasks (id, title, color, completed, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(task.id().as_uuid())
        .bind(task.title().as_str())
        .bind(task.color().as_str())
        .bind(task.is_completed())
        .bind(task.created_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %task.id()))]
    async fn update(&self, task: &Task) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = $2, color = $3, completed = $4
            WHERE id = $1
            "#,
        )
        .bind(task.id().as_uuid())
        .bind(task.title().as_str())
        .bind(task.color().as_str())
        .bind(task.is_completed())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &TaskId) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn ping(&self) -> Result<(), InfraError> {
        crate::db::ping(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::InfraErrorKind;

    fn row(title: &str, color: &str) -> TaskRow {
        TaskRow {
            id:         Uuid::now_v7(),
            title:      title.to_string(),
            color:      color.to_string(),
            completed:  true,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_リポジトリはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresTaskRepository>();
    }

    #[test]
    fn test_行をタスクに変換できる() {
        let row = row("牛乳を買う", "#ff0000");
        let id = row.id;
        let created_at = row.created_at;

        let task = row.into_task().unwrap();

        assert_eq!(task.id().as_uuid(), &id);
        assert_eq!(task.title().as_str(), "牛乳を買う");
        assert_eq!(task.color().as_str(), "#ff0000");
        assert!(task.is_completed());
        assert_eq!(task.created_at(), created_at);
    }

    #[test]
    fn test_空タイトルの行は不正なレコードになる() {
        let err = row("", "red").into_task().unwrap_err();

        assert!(matches!(
            err.kind(),
            InfraErrorKind::CorruptRecord { entity, .. } if entity == "Task"
        ));
    }

    #[test]
    fn test_空の色の行は不正なレコードになる() {
        let err = row("a", "").into_task().unwrap_err();

        assert!(matches!(err.kind(), InfraErrorKind::CorruptRecord { .. }));
    }
}
