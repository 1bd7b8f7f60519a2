//! # タスクハンドラ
//!
//! タスクの CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /tasks` - タスク一覧（新しい順）
//! - `POST /tasks` - タスク作成
//! - `PUT /tasks/{id}` - タスクの部分更新
//! - `DELETE /tasks/{id}` - タスク削除
//!
//! リクエストボディは一度 `serde_json::Value` として受け取り、
//! [`TaskDraft`] / [`TaskPatch`] で検証する。不正なフィールドをすべて
//! まとめて返すため、serde の型付きデシリアライズは使わない。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use taskboard_domain::task::{Task, TaskDraft, TaskId, TaskPatch};
use uuid::Uuid;

use crate::{error::CoreError, usecase::TaskUseCaseImpl};

/// タスク API の共有状態
pub struct TaskState {
    pub usecase: TaskUseCaseImpl,
}

// --- レスポンス型 ---

/// タスク DTO
///
/// `createdAt` は ISO 8601（UTC, ミリ秒精度）。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id:         Uuid,
    pub title:      String,
    pub color:      String,
    pub completed:  bool,
    pub created_at: String,
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id:         *task.id().as_uuid(),
            title:      task.title().as_str().to_string(),
            color:      task.color().as_str().to_string(),
            completed:  task.is_completed(),
            created_at: task
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

// --- ハンドラ ---

/// GET /tasks
///
/// 全タスクを `createdAt` の降順で返す。
#[tracing::instrument(skip_all)]
pub async fn list_tasks(
    State(state): State<Arc<TaskState>>,
) -> Result<impl IntoResponse, CoreError> {
    let tasks = state.usecase.list_tasks().await?;

    let items: Vec<TaskDto> = tasks.iter().map(TaskDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// POST /tasks
///
/// タスクを作成する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたタスク
/// - `400 Bad Request`: JSON として読めない、またはスキーマ検証エラー
#[tracing::instrument(skip_all)]
pub async fn create_task(
    State(state): State<Arc<TaskState>>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let body = read_body(body)?;
    let draft = TaskDraft::from_json(&body)?;

    let task = state.usecase.create_task(draft).await?;

    Ok((StatusCode::CREATED, Json(TaskDto::from(&task))))
}

/// PUT /tasks/{id}
///
/// タスクを部分更新する。ボディにないフィールドは現在値が維持される。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のタスク
/// - `400 Bad Request`: JSON として読めない、またはスキーマ検証エラー（ストアには触れない）
/// - `404 Not Found`: タスクが見つからない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_task(
    State(state): State<Arc<TaskState>>,
    Path(id): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let body = read_body(body)?;
    let patch = TaskPatch::from_json(&body)?;
    let task_id = parse_task_id(&id)?;

    let task = state.usecase.update_task(&task_id, patch).await?;

    Ok((StatusCode::OK, Json(TaskDto::from(&task))))
}

/// DELETE /tasks/{id}
///
/// タスクを削除する。
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `404 Not Found`: タスクが見つからない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_task(
    State(state): State<Arc<TaskState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CoreError> {
    let task_id = parse_task_id(&id)?;

    state.usecase.delete_task(&task_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// --- ヘルパー ---

/// JSON として読めなかったボディを 400 に変換する
fn read_body(body: Result<Json<JsonValue>, JsonRejection>) -> Result<JsonValue, CoreError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "リクエストボディを JSON として読めませんでした");
            Err(CoreError::BadRequest(rejection.body_text()))
        }
    }
}

/// UUID でないパスはどのタスクも指さないため 404 とする
fn parse_task_id(id: &str) -> Result<TaskId, CoreError> {
    TaskId::parse(id).ok_or_else(|| CoreError::NotFound(format!("タスクが見つかりません: {id}")))
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use pretty_assertions::assert_eq;
    use taskboard_domain::task::{NewTask, TaskColor, TaskTitle};

    use super::*;

    #[test]
    fn test_task_dtoはcamel_caseでシリアライズされる() {
        let task = Task::new(NewTask {
            id:         TaskId::new(),
            title:      TaskTitle::new("牛乳を買う").unwrap(),
            color:      TaskColor::new("#ff0000").unwrap(),
            completed:  false,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        });

        let json = serde_json::to_value(TaskDto::from(&task)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": task.id().to_string(),
                "title": "牛乳を買う",
                "color": "#ff0000",
                "completed": false,
                "createdAt": "2023-11-14T22:13:20.000Z"
            })
        );
    }

    #[test]
    fn test_uuidでないidはnot_foundになる() {
        assert!(matches!(
            parse_task_id("not-a-uuid"),
            Err(CoreError::NotFound(_))
        ));
    }
}
