//! # Task Service サーバー
//!
//! タスク（タイトル・色・完了フラグを持つ To-Do 項目）の CRUD を提供する HTTP サービス。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3001`） |
//! | `TASK_STORE` | No | `postgres`（デフォルト）または `memory` |
//! | `DATABASE_URL` | `TASK_STORE=postgres` のとき | PostgreSQL 接続 URL |
//! | `RUN_MIGRATIONS` | No | 起動時にマイグレーションを適用するか（デフォルト: `true`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,taskboard=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（DB なし）
//! TASK_STORE=memory cargo run -p taskboard-task-service
//!
//! # 本番環境
//! DATABASE_URL=postgres://... LOG_FORMAT=json cargo run -p taskboard-task-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use taskboard_domain::clock::SystemClock;
use taskboard_infra::{
    InMemoryTaskRepository,
    db,
    repository::{PostgresTaskRepository, TaskRepository},
};
use taskboard_shared::observability::TracingConfig;
use taskboard_task_service::{
    build_app,
    config::{TaskServiceConfig, TaskStoreConfig},
    handler::{ReadinessState, TaskState},
    usecase::TaskUseCaseImpl,
};
use tokio::net::TcpListener;

/// Task Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("task-service");
    taskboard_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "task-service").entered();

    // 設定読み込み
    let config = TaskServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Task Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let task_repository = create_task_repository(&config.store).await?;

    // 依存コンポーネントを初期化
    let readiness_state = Arc::new(ReadinessState {
        task_repository: task_repository.clone(),
    });
    let task_usecase = TaskUseCaseImpl::new(task_repository, Arc::new(SystemClock));
    let task_state = Arc::new(TaskState {
        usecase: task_usecase,
    });

    let app = build_app(task_state, readiness_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Task Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Task Service サーバーを停止しました");
    Ok(())
}

/// 設定に応じたタスクストアを用意する
async fn create_task_repository(
    store: &TaskStoreConfig,
) -> anyhow::Result<Arc<dyn TaskRepository>> {
    match store {
        TaskStoreConfig::Postgres {
            database_url,
            run_migrations,
        } => {
            let pool = db::create_pool(database_url)
                .await
                .context("データベース接続に失敗しました")?;
            tracing::info!("データベースに接続しました");

            if *run_migrations {
                db::run_migrations(&pool)
                    .await
                    .context("マイグレーションの実行に失敗しました")?;
                tracing::info!("マイグレーションを適用しました");
            }

            Ok(Arc::new(PostgresTaskRepository::new(pool)))
        }
        TaskStoreConfig::Memory => {
            tracing::warn!("インメモリストアで起動します（再起動でデータは失われます）");
            Ok(Arc::new(InMemoryTaskRepository::new()))
        }
    }
}

/// Ctrl+C を待つ
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "シグナルハンドラの登録に失敗しました");
    }
}
