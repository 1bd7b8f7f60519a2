//! # ヘルスチェックハンドラ
//!
//! Task Service の稼働状態を確認するためのエンドポイント。
//!
//! - `/health`: Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready`: Readiness Check（タスクストアへの到達性を確認）
//!
//! レスポンス型は [`taskboard_shared::HealthResponse`] / [`taskboard_shared::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use taskboard_infra::repository::TaskRepository;
use taskboard_shared::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};

/// ストア確認のタイムアウト
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Task Service のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub task_repository: Arc<dyn TaskRepository>,
}

/// Task Service の Readiness Check エンドポイント
///
/// タスクストアに到達できれば 200、できなければ 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let storage = check_storage(state.task_repository.as_ref()).await;

    let response =
        ReadinessResponse::from_checks(HashMap::from([("storage".to_string(), storage)]));
    let http_status = match response.status {
        ReadinessStatus::Ready => StatusCode::OK,
        ReadinessStatus::NotReady => StatusCode::SERVICE_UNAVAILABLE,
    };

    (http_status, Json(response))
}

async fn check_storage(repository: &dyn TaskRepository) -> CheckStatus {
    match tokio::time::timeout(CHECK_TIMEOUT, repository.ping()).await {
        Ok(Ok(())) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: storage ping failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: storage check timed out");
            CheckStatus::Error
        }
    }
}
