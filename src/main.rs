use anyhow::Context;
use std::env;
use std::sync::Arc;
use todo_rest::{SharedData, app_env, build_app, logging};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let otel_exporters = match (
        env::var(app_env::OTEL_SPAN_EXPORT_URL),
        env::var(app_env::OTEL_METRIC_EXPORT_URL),
    ) {
        (Ok(span_url), Ok(metric_url)) => Some(logging::init_exporters(&span_url, &metric_url)?),
        _ => None,
    };
    let exporting_telemetry = otel_exporters.is_some();
    logging::setup_logging_and_tracing(logging::init_env_filter()?, otel_exporters);

    if !dotenv_loaded {
        info!("No .env file found, using the process environment only");
    }
    if !exporting_telemetry {
        warn!(
            "{} and {} are not both set, telemetry will only be logged to stdout",
            app_env::OTEL_SPAN_EXPORT_URL,
            app_env::OTEL_METRIC_EXPORT_URL
        );
    }

    let port = app_env::server_port()?;
    let app = build_app(Arc::new(SharedData::new()));

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("binding to port {port}"))?;
    info!("Starting server on port {port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("running the HTTP server")?;

    info!("Server shut down");
    Ok(())
}

/// Resolves once the process receives Ctrl-C
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for the shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
