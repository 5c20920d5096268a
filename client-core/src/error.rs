use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Telemetry error: {0}")]
    TelemetryError(anyhow::Error),
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<opentelemetry::trace::TraceError> for CoreError {
    fn from(err: opentelemetry::trace::TraceError) -> Self {
        CoreError::TelemetryError(anyhow::Error::new(err))
    }
}

impl From<tracing_subscriber::util::TryInitError> for CoreError {
    fn from(err: tracing_subscriber::util::TryInitError) -> Self {
        CoreError::TelemetryError(anyhow::Error::new(err))
    }
}
