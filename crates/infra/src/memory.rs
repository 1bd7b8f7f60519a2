//! # インメモリのタスクストア
//!
//! `TASK_STORE=memory` で起動した場合と、ユースケース・API のテストで使う
//! [`TaskRepository`] 実装。プロセス終了とともにデータは失われる。
//!
//! 一覧の並びは PostgreSQL 実装に合わせて `created_at` の降順とし、
//! 同時刻のタスクは後から挿入したものを先にする。

use std::sync::Arc;

use async_trait::async_trait;
use taskboard_domain::task::{Task, TaskId};
use tokio::sync::RwLock;

use crate::{error::InfraError, repository::TaskRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
   /// 挿入順に保持する
   tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
   pub fn new() -> Self {
      Self::default()
   }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
   async fn find_all(&self) -> Result<Vec<Task>, InfraError> {
      let tasks = self.tasks.read().await;
      let mut sorted: Vec<Task> = tasks.iter().rev().cloned().collect();
      // 安定ソートなので同時刻は新しく挿入した順が保たれる
      sorted.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
      Ok(sorted)
   }

   async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, InfraError> {
      Ok(self
         .tasks
         .read()
         .await
         .iter()
         .find(|t| t.id() == id)
         .cloned())
   }

   async fn insert(&self, task: &Task) -> Result<(), InfraError> {
      let mut tasks = self.tasks.write().await;
      if tasks.iter().any(|t| t.id() == task.id()) {
         return Err(InfraError::unexpected(format!(
            "タスク ID が重複しています: {}",
            task.id()
         )));
      }
      tasks.push(task.clone());
      Ok(())
   }

   async fn update(&self, task: &Task) -> Result<bool, InfraError> {
      let mut tasks = self.tasks.write().await;
      let Some(stored) = tasks.iter_mut().find(|t| t.id() == task.id()) else {
         return Ok(false);
      };
      // id と created_at は保存済みの値を維持する
      *stored = Task::from_db(
         stored.id().clone(),
         task.title().clone(),
         task.color().clone(),
         task.is_completed(),
         stored.created_at(),
      );
      Ok(true)
   }

   async fn delete(&self, id: &TaskId) -> Result<bool, InfraError> {
      let mut tasks = self.tasks.write().await;
      let before = tasks.len();
      tasks.retain(|t| t.id() != id);
      Ok(tasks.len() < before)
   }

   async fn ping(&self) -> Result<(), InfraError> {
      Ok(())
   }
}
