use anyhow::Context;
use std::env;

/// Port the HTTP server listens on. Defaults to [DEFAULT_PORT] when unset.
pub const PORT: &str = "PORT";
/// Log level configuration for the application. For formatting info, see [EnvFilter's documentation](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// OpenTelemetry span export URL. Should be http://localhost:4317 by default, as the service should
/// have an OpenTelemetry collector sidecar which directs metrics to the correct place
pub const OTEL_SPAN_EXPORT_URL: &str = "OTEL_SPAN_EXPORT_URL";
/// OpenTelemetry metrics export URL. Should be http://localhost:4317 by default, as the service should
/// have an OpenTelemetry collector sidecar which directs metrics to the correct place
pub const OTEL_METRIC_EXPORT_URL: &str = "OTEL_METRIC_EXPORT_URL";

pub const DEFAULT_PORT: u16 = 3000;

/// Reads the listen port from [PORT]
pub fn server_port() -> Result<u16, anyhow::Error> {
    parse_port(env::var(PORT).ok().as_deref())
}

fn parse_port(raw_port: Option<&str>) -> Result<u16, anyhow::Error> {
    match raw_port {
        None => Ok(DEFAULT_PORT),
        Some(port) => port
            .trim()
            .parse()
            .with_context(|| format!("{PORT} must be a port number, got \"{port}\"")),
    }
}
