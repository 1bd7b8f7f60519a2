//! # Observability 基盤
//!
//! トレーシング初期化とログ出力形式の設定を提供する。
//! 環境変数 `LOG_FORMAT` による JSON / Pretty 出力の切り替えに対応する。

/// ログ出力形式
///
/// 環境変数 `LOG_FORMAT` で切り替える。
/// 値が未設定または不正な場合は [`Pretty`](LogFormat::Pretty) にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON 形式（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

impl LogFormat {
    /// 文字列からログ形式をパースする
    ///
    /// 不正な値の場合は [`Pretty`](LogFormat::Pretty) にフォールバックし、
    /// stderr に警告を出力する（トレーシング初期化前に呼ばれるため）。
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            other => {
                eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    /// 環境変数 `LOG_FORMAT` から読み取る
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT") {
            Ok(val) => Self::parse(&val),
            Err(_) => Self::default(),
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// サービス名（JSON ログの `span.service` フィールドに出力）
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// 環境変数から設定を読み取る
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::new(service_name, LogFormat::from_env())
    }
}

/// デフォルトのログフィルタ（`RUST_LOG` 未設定時）
#[cfg(feature = "observability")]
const DEFAULT_FILTER: &str = "info,taskboard=debug";

/// トレーシングを初期化する
///
/// [`build_subscriber`] で組み立てた subscriber をグローバルに登録する。
/// プロセス内で 1 回だけ呼び出すこと。
///
/// サービス名は呼び出し元で `tracing::info_span!("app", service = "...")` を設定することで
/// `span.service` として JSON に含まれる。
#[cfg(feature = "observability")]
pub fn init_tracing(config: TracingConfig) {
    use tracing_subscriber::util::SubscriberInitExt;

    build_subscriber(config.log_format).init();
}

/// subscriber を組み立てる
///
/// - `RUST_LOG` によるフィルタ（未設定なら `"info,taskboard=debug"`）
/// - `LOG_FORMAT` に応じた JSON / Pretty の出力
/// - [`tracing_error::ErrorLayer`]: エラー生成時に `SpanTrace` を捕捉できるようにする
#[cfg(feature = "observability")]
pub fn build_subscriber(log_format: LogFormat) -> impl tracing::Subscriber + Send + Sync + 'static {
    use tracing_subscriber::layer::SubscriberExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer(log_format))
        .with(tracing_error::ErrorLayer::default())
}

#[cfg(feature = "observability")]
fn fmt_layer<S>(format: LogFormat) -> Box<dyn tracing_subscriber::Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    use tracing_subscriber::Layer as _;

    match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    }
}

/// HTTP リクエスト用のスパンを作成する
///
/// `TraceLayer::make_span_with` に渡す。スパン内で出力されるログには
/// `method` と `uri` が自動的に付与される。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== LogFormat::parse テスト =====

    #[test]
    fn test_parse_jsonでjsonを返す() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
    }

    #[test]
    fn test_parse_prettyでprettyを返す() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
    }

    #[test]
    fn test_parse_不正な値でprettyにフォールバックする() {
        assert_eq!(LogFormat::parse("unknown"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(""), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Pretty);
    }

    #[test]
    fn test_newでフィールドが正しく設定される() {
        let config = TracingConfig::new("task-service", LogFormat::Json);

        assert_eq!(config.service_name, "task-service");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[cfg(feature = "observability")]
    #[test]
    fn test_build_subscriber下ではエラー生成時のスパンがspan_traceに残る() {
        let subscriber = build_subscriber(LogFormat::Pretty);

        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::error_span!("find_by_id", task_id = "T-001");
            let _enter = span.enter();

            let trace = tracing_error::SpanTrace::capture();

            assert_eq!(trace.status(), tracing_error::SpanTraceStatus::CAPTURED);
            assert!(
                trace.to_string().contains("find_by_id"),
                "SpanTrace がスパン名を含むこと: {trace}",
            );
        });
    }

    #[cfg(feature = "observability")]
    #[test]
    fn test_json形式のsubscriberでもspan_traceを捕捉できる() {
        let subscriber = build_subscriber(LogFormat::Json);

        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::error_span!("delete_task");
            let _enter = span.enter();
            tracing::error!("json 出力の確認");

            assert!(tracing_error::SpanTrace::capture().to_string().contains("delete_task"));
        });
    }

    #[cfg(feature = "observability")]
    #[test]
    fn test_make_request_spanがパニックせずにスパンを作る() {
        let request = http::Request::builder()
            .method("PUT")
            .uri("/tasks/abc")
            .body(())
            .unwrap();

        let _span = make_request_span(&request);
    }
}
