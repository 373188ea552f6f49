use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod middleware;
mod routes;

use config::{ApiConfig, LogFormat};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        // Structured JSON logging for CloudWatch
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/assessments", get(routes::assessments::list_assessments))
        .route("/assessments/{id}", get(routes::assessments::get_assessment))
        .route(
            "/assessments/{id}/validate",
            post(routes::scoring::validate_answers),
        )
        .route(
            "/assessments/{id}/score",
            post(routes::scoring::score_answers),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env()?;
    init_tracing(config.log_format);

    if config.lambda {
        tracing::info!("starting under the Lambda runtime");
        return lambda_http::run(app()).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app()).await?;
    Ok(())
}
