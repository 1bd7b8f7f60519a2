//! # タスク
//!
//! Taskboard が管理する唯一のエンティティ。タイトル・色・完了フラグを持つ
//! To-Do 項目を表現する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`Task`] | タスク | 一意の ID と作成日時を持つ To-Do 項目 |
//! | [`TaskTitle`] | タイトル | 空でない文字列 |
//! | [`TaskColor`] | 色 | 空でない自由形式の文字列（パレット検証なし） |
//! | [`TaskDraft`] | 作成入力 | 作成用スキーマで検証済みの入力 |
//! | [`TaskPatch`] | 部分更新入力 | 全フィールド任意のスキーマで検証済みの入力 |
//!
//! ## ライフサイクル
//!
//! 作成で ID と `created_at` が確定し、以後この 2 つは変わらない。
//! 変更は [`Task::apply`] による部分更新のみ。削除は物理削除。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use taskboard_domain::task::{NewTask, Task, TaskColor, TaskId, TaskPatch, TaskTitle};
//!
//! let task = Task::new(NewTask {
//!     id:         TaskId::new(),
//!     title:      TaskTitle::new("牛乳を買う")?,
//!     color:      TaskColor::new("#ff0000")?,
//!     completed:  false,
//!     created_at: chrono::Utc::now(),
//! });
//!
//! // completed だけを更新し、title と color はそのまま残る
//! let patch = TaskPatch {
//!     completed: Some(true),
//!     ..TaskPatch::default()
//! };
//! let updated = task.apply(patch);
//!
//! assert!(updated.is_completed());
//! assert_eq!(updated.title().as_str(), "牛乳を買う");
//! # Ok(())
//! # }
//! ```

mod payload;

use chrono::{DateTime, Utc};
pub use payload::*;

define_uuid_id! {
    /// タスクの一意識別子
    pub struct TaskId;
}

impl TaskId {
   /// パスセグメントなどの文字列から ID を復元する
   ///
   /// UUID として解釈できない文字列はどのタスクも指さないため `None` を返す。
   pub fn parse(value: &str) -> Option<Self> {
      uuid::Uuid::parse_str(value).ok().map(Self::from_uuid)
   }
}

define_non_empty_string! {
    /// タスクのタイトル
    pub struct TaskTitle {
        label: "タイトル",
    }
}

define_non_empty_string! {
    /// タスクの色（`"#ff0000"`, `"red"` など自由形式）
    pub struct TaskColor {
        label: "色",
    }
}

/// 新規タスクの生成パラメータ
pub struct NewTask {
   pub id:         TaskId,
   pub title:      TaskTitle,
   pub color:      TaskColor,
   pub completed:  bool,
   pub created_at: DateTime<Utc>,
}

/// タスクエンティティ
///
/// # 不変条件
///
/// - `id` と `created_at` は作成後に変化しない
/// - `title` と `color` は空文字列にならない（型で保証）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
   id:         TaskId,
   title:      TaskTitle,
   color:      TaskColor,
   completed:  bool,
   created_at: DateTime<Utc>,
}

impl Task {
   /// 新しいタスクを作成する
   pub fn new(params: NewTask) -> Self {
      Self {
         id:         params.id,
         title:      params.title,
         color:      params.color,
         completed:  params.completed,
         created_at: params.created_at,
      }
   }

   /// データベースから復元する
   pub fn from_db(
      id: TaskId,
      title: TaskTitle,
      color: TaskColor,
      completed: bool,
      created_at: DateTime<Utc>,
   ) -> Self {
      Self {
         id,
         title,
         color,
         completed,
         created_at,
      }
   }

   /// 部分更新を適用した新しいタスクを返す
   ///
   /// フィールドごとに「入力があれば入力値、なければ現在値」を選ぶ。
   /// レコード全体を入力で上書きすることはしない。
   pub fn apply(self, patch: TaskPatch) -> Self {
      Self {
         title: patch.title.unwrap_or(self.title),
         color: patch.color.unwrap_or(self.color),
         completed: patch.completed.unwrap_or(self.completed),
         ..self
      }
   }

   // Getter メソッド

   pub fn id(&self) -> &TaskId {
      &self.id
   }

   pub fn title(&self) -> &TaskTitle {
      &self.title
   }

   pub fn color(&self) -> &TaskColor {
      &self.color
   }

   pub fn is_completed(&self) -> bool {
      self.completed
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }
}
