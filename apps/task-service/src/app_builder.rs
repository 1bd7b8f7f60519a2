//! # Task Service アプリケーション構築
//!
//! State を受け取り、ルーターとミドルウェアを組み立てる。
//! `main.rs` は設定読み込み・ストア初期化・サーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use taskboard_shared::observability::make_request_span;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handler::{
    ReadinessState,
    TaskState,
    create_task,
    delete_task,
    health_check,
    list_tasks,
    readiness_check,
    update_task,
};

/// ルーター定義を行う
///
/// CORS はオリジン・メソッド・ヘッダーすべてを許可する。
pub fn build_app(task_state: Arc<TaskState>, readiness_state: Arc<ReadinessState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
        .with_state(task_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
}
