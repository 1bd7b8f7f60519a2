//! # タスク入力スキーマ
//!
//! リクエストボディ（JSON）を検証し、ドメイン型へ変換する。
//!
//! - 作成用スキーマ: `title`（必須・空でない文字列）、`color`（必須・空でない文字列）、
//!   `completed`（任意・真偽値、省略時 `false`）
//! - 部分更新スキーマ: 上記すべてを任意にしたもの
//!
//! 不正なフィールドは最初の 1 件で打ち切らず、すべて収集して返す。
//! 未知のキーは無視する。

use serde_json::{Map, Value as JsonValue};
use taskboard_shared::FieldError;
use thiserror::Error;

use super::{TaskColor, TaskTitle};
use crate::DomainError;

/// 入力検証で見つかったフィールドエラーの一覧
///
/// 空の状態で返されることはない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("入力値が不正です（{} 件）", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
   pub fn errors(&self) -> &[FieldError] {
      &self.0
   }

   pub fn into_errors(self) -> Vec<FieldError> {
      self.0
   }
}

/// 作成用スキーマで検証済みの入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
   pub title:     TaskTitle,
   pub color:     TaskColor,
   pub completed: bool,
}

impl TaskDraft {
   /// 作成リクエストのボディを検証する
   pub fn from_json(body: &JsonValue) -> Result<Self, ValidationErrors> {
      let object = expect_object(body)?;
      let mut errors = Vec::new();

      let title = required("title", text_field(object, "title", TaskTitle::new, &mut errors), &mut errors);
      let color = required("color", text_field(object, "color", TaskColor::new, &mut errors), &mut errors);
      let completed = bool_field(object, "completed", &mut errors).into_option();

      let (Some(title), Some(color)) = (title, color) else {
         return Err(ValidationErrors(errors));
      };
      if !errors.is_empty() {
         return Err(ValidationErrors(errors));
      }

      Ok(Self {
         title,
         color,
         completed: completed.unwrap_or(false),
      })
   }
}

/// 部分更新スキーマで検証済みの入力
///
/// `None` のフィールドは「指定なし」を意味し、現在値が維持される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
   pub title:     Option<TaskTitle>,
   pub color:     Option<TaskColor>,
   pub completed: Option<bool>,
}

impl TaskPatch {
   /// 更新リクエストのボディを検証する
   ///
   /// 空オブジェクトは「何も変更しない」有効な入力として扱う。
   pub fn from_json(body: &JsonValue) -> Result<Self, ValidationErrors> {
      let object = expect_object(body)?;
      let mut errors = Vec::new();

      let title = text_field(object, "title", TaskTitle::new, &mut errors).into_option();
      let color = text_field(object, "color", TaskColor::new, &mut errors).into_option();
      let completed = bool_field(object, "completed", &mut errors).into_option();

      if !errors.is_empty() {
         return Err(ValidationErrors(errors));
      }

      Ok(Self {
         title,
         color,
         completed,
      })
   }
}

// --- フィールド読み取り ---

/// フィールドの読み取り結果
enum FieldValue<T> {
   Missing,
   Invalid,
   Valid(T),
}

impl<T> FieldValue<T> {
   fn into_option(self) -> Option<T> {
      match self {
         Self::Valid(value) => Some(value),
         Self::Missing | Self::Invalid => None,
      }
   }
}

fn expect_object(body: &JsonValue) -> Result<&Map<String, JsonValue>, ValidationErrors> {
   body.as_object().ok_or_else(|| {
      ValidationErrors(vec![FieldError::new(
         "",
         "invalid_type",
         format!(
            "リクエストボディは JSON オブジェクトである必要があります（受け取った型: {}）",
            json_type_name(body)
         ),
      )])
   })
}

/// 必須フィールドの欠落をエラーとして記録する
fn required<T>(field: &str, value: FieldValue<T>, errors: &mut Vec<FieldError>) -> Option<T> {
   if let FieldValue::Missing = value {
      errors.push(FieldError::new(
         field,
         "required",
         format!("{field} は必須です"),
      ));
   }
   value.into_option()
}

/// 文字列フィールドを読み取り、値オブジェクトに変換する
///
/// `null` は欠落ではなく型違いとして扱う。
fn text_field<T>(
   object: &Map<String, JsonValue>,
   field: &str,
   make: fn(String) -> Result<T, DomainError>,
   errors: &mut Vec<FieldError>,
) -> FieldValue<T> {
   match object.get(field) {
      None => FieldValue::Missing,
      Some(JsonValue::String(s)) => match make(s.clone()) {
         Ok(value) => FieldValue::Valid(value),
         Err(_) => {
            errors.push(FieldError::new(
               field,
               "too_small",
               format!("{field} は 1 文字以上である必要があります"),
            ));
            FieldValue::Invalid
         }
      },
      Some(other) => {
         errors.push(invalid_type(field, "string", other));
         FieldValue::Invalid
      }
   }
}

fn bool_field(
   object: &Map<String, JsonValue>,
   field: &str,
   errors: &mut Vec<FieldError>,
) -> FieldValue<bool> {
   match object.get(field) {
      None => FieldValue::Missing,
      Some(JsonValue::Bool(b)) => FieldValue::Valid(*b),
      Some(other) => {
         errors.push(invalid_type(field, "boolean", other));
         FieldValue::Invalid
      }
   }
}

fn invalid_type(field: &str, expected: &str, received: &JsonValue) -> FieldError {
   FieldError::new(
      field,
      "invalid_type",
      format!(
         "{field} は {expected} である必要があります（受け取った型: {}）",
         json_type_name(received)
      ),
   )
}

fn json_type_name(value: &JsonValue) -> &'static str {
   match value {
      JsonValue::Null => "null",
      JsonValue::Bool(_) => "boolean",
      JsonValue::Number(_) => "number",
      JsonValue::String(_) => "string",
      JsonValue::Array(_) => "array",
      JsonValue::Object(_) => "object",
   }
}
