//! # Task Service 設定
//!
//! 環境変数から Task Service サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3001`） |
//! | `TASK_STORE` | No | `postgres`（デフォルト）または `memory` |
//! | `DATABASE_URL` | `TASK_STORE=postgres` のとき | PostgreSQL 接続 URL |
//! | `RUN_MIGRATIONS` | No | 起動時にマイグレーションを適用するか（デフォルト: `true`） |

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} が設定されていません")]
    Missing { name: &'static str },

    #[error("{name} の値が不正です: {value:?}（{expected}）")]
    Invalid {
        name:     &'static str,
        value:    String,
        expected: &'static str,
    },
}

/// タスクの保存先
///
/// `TASK_STORE` 環境変数で切り替える:
/// - `postgres`: PostgreSQL に永続化する
/// - `memory`: プロセス内に保持する（再起動で消える）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStoreConfig {
    Postgres {
        database_url:   String,
        run_migrations: bool,
    },
    Memory,
}

/// Task Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskServiceConfig {
    /// バインドアドレス
    pub host:  String,
    /// ポート番号
    pub port:  u16,
    pub store: TaskStoreConfig,
}

impl TaskServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
                expected: "0〜65535 の整数",
            })?,
            None => DEFAULT_PORT,
        };

        let store = match lookup("TASK_STORE").as_deref().unwrap_or("postgres") {
            "postgres" => TaskStoreConfig::Postgres {
                database_url:   lookup("DATABASE_URL")
                    .ok_or(ConfigError::Missing { name: "DATABASE_URL" })?,
                run_migrations: parse_bool("RUN_MIGRATIONS", lookup("RUN_MIGRATIONS"), true)?,
            },
            "memory" => TaskStoreConfig::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    name:     "TASK_STORE",
                    value:    other.to_string(),
                    expected: "postgres または memory",
                });
            }
        };

        Ok(Self { host, port, store })
    }
}

fn parse_bool(
    name: &'static str,
    value: Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    match value.as_deref() {
        None => Ok(default),
        Some("true" | "1") => Ok(true),
        Some("false" | "0") => Ok(false),
        Some(other) => Err(ConfigError::Invalid {
            name,
            value: other.to_string(),
            expected: "true または false",
        }),
    }
}
