//! Server startup utilities.

use crate::di;
use asmo_config::{AppConfig, LogFormat, ObservabilityConfig};
use asmo_core::{AsmoError, AsmoResult};
use asmo_rest::{create_router, MetricsEndpoint};
use asmo_service::metrics::register_metrics;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the log filter: `RUST_LOG` when set, otherwise the configured level.
pub fn log_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&config.log_level))
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},tower_http=info,sqlx=warn"))
}

/// Installs the global tracing subscriber.
pub fn init_logging(config: &ObservabilityConfig) -> AsmoResult<()> {
    let registry = tracing_subscriber::registry().with(log_filter(config));

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    result.map_err(|e| AsmoError::Configuration(format!("Failed to install logger: {}", e)))
}

/// Installs the Prometheus recorder when metrics are enabled.
pub fn install_metrics(config: &ObservabilityConfig) -> AsmoResult<Option<MetricsEndpoint>> {
    if !config.metrics_enabled {
        info!("Metrics disabled");
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AsmoError::Configuration(format!("Failed to install metrics recorder: {}", e)))?;
    register_metrics();

    Ok(Some(MetricsEndpoint {
        path: config.metrics_path.clone(),
        handle,
    }))
}

/// Connects everything, serves until `shutdown` resolves, then closes the
/// cache and the database pool.
pub async fn run<F>(config: AppConfig, shutdown: F) -> AsmoResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.validate()?;
    info!("Environment: {}", config.app.environment);

    let components = di::build_components(&config).await?;
    let metrics = install_metrics(&config.observability)?;
    let router = create_router(components.state.clone(), &config.server, metrics);

    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AsmoError::Configuration(format!("Failed to bind {}: {}", addr, e)))?;

    print_startup_info(&config);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AsmoError::internal(format!("Server error: {}", e)));

    components.shutdown().await;
    info!("Server shutdown complete");
    served
}

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ___   _____ __  _______
   /   | / ___//  |/  / __ \
  / /| | \__ \/ /|_/ / / / /
 / ___ |___/ / /  / / /_/ /
/_/  |_/____/_/  /_/\____/

          site backend
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let port = config.server.port;
    info!("{}", separator);
    info!("REST API:  http://{}", config.server.addr());
    info!("Health:    http://0.0.0.0:{}/api/health", port);
    info!("API Docs:  http://0.0.0.0:{}/swagger-ui", port);
    if config.observability.metrics_enabled {
        info!("Metrics:   http://0.0.0.0:{}{}", port, config.observability.metrics_path);
    }
    info!("{}", separator);
}
