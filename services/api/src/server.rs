use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_export_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use job_board::candidates::{CandidateExporter, SqliteCandidateRepository};
use job_board::config::AppConfig;
use job_board::db::create_pool;
use job_board::error::AppError;
use job_board::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(url) = args.database_url.take() {
        config.database.url = url;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let pool = create_pool(&config.database).await?;
    let repository = Arc::new(SqliteCandidateRepository::new(pool));
    let exporter = Arc::new(CandidateExporter::new(repository));

    let app = with_export_routes(exporter)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "candidate export service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
