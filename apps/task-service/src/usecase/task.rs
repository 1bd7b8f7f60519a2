//! # タスクユースケース
//!
//! タスクの一覧・作成・部分更新・削除を実装する。
//!
//! 入力はハンドラで [`TaskDraft`] / [`TaskPatch`] に検証済みの状態で渡される。
//! ID と `created_at` はここで採番し、クライアントからは受け取らない。

use std::sync::Arc;

use taskboard_domain::{
   clock::Clock,
   task::{NewTask, Task, TaskDraft, TaskId, TaskPatch},
};
use taskboard_infra::repository::TaskRepository;

use crate::error::CoreError;

/// タスクユースケース
pub struct TaskUseCaseImpl {
   task_repository: Arc<dyn TaskRepository>,
   clock:           Arc<dyn Clock>,
}

impl TaskUseCaseImpl {
   pub fn new(task_repository: Arc<dyn TaskRepository>, clock: Arc<dyn Clock>) -> Self {
      Self {
         task_repository,
         clock,
      }
   }

   /// 全タスクを新しい順で取得する
   pub async fn list_tasks(&self) -> Result<Vec<Task>, CoreError> {
      let tasks = self.task_repository.find_all().await?;
      tracing::debug!(count = tasks.len(), "タスク一覧を取得しました");
      Ok(tasks)
   }

   /// タスクを作成する
   ///
   /// 重複チェックは行わない。同じ内容でも毎回新しいタスクになる。
   pub async fn create_task(&self, draft: TaskDraft) -> Result<Task, CoreError> {
      let task = Task::new(NewTask {
         id:         TaskId::new(),
         title:      draft.title,
         color:      draft.color,
         completed:  draft.completed,
         created_at: self.clock.now(),
      });

      self.task_repository.insert(&task).await?;

      tracing::info!(task_id = %task.id(), "タスクを作成しました");
      Ok(task)
   }

   /// タスクを部分更新する
   ///
   /// 1. 既存タスクを取得（なければ NotFound）
   /// 2. 入力のあるフィールドだけを上書きしたタスクを組み立てる
   /// 3. 可変フィールドをまとめて保存する
   ///
   /// 取得から保存までの間に削除された場合も NotFound を返す。
   pub async fn update_task(&self, id: &TaskId, patch: TaskPatch) -> Result<Task, CoreError> {
      let existing = self.find_task(id).await?;

      tracing::info!(
         task_id = %id,
         title = patch.title.is_some(),
         color = patch.color.is_some(),
         completed = ?patch.completed,
         "タスクを更新します"
      );

      let updated = existing.apply(patch);
      if !self.task_repository.update(&updated).await? {
         return Err(not_found(id));
      }

      Ok(updated)
   }

   /// タスクを削除する
   pub async fn delete_task(&self, id: &TaskId) -> Result<(), CoreError> {
      self.find_task(id).await?;

      if !self.task_repository.delete(id).await? {
         return Err(not_found(id));
      }

      tracing::info!(task_id = %id, "タスクを削除しました");
      Ok(())
   }

   async fn find_task(&self, id: &TaskId) -> Result<Task, CoreError> {
      self.task_repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| not_found(id))
   }
}

fn not_found(id: &TaskId) -> CoreError {
   CoreError::NotFound(format!("タスクが見つかりません: {id}"))
}
