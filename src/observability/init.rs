//! Tracing initialization and subscriber setup.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to exported spans.
const SERVICE_NAME: &str = "resource-hub";

/// Initializes the global tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # Sinks
///
/// - `config.trace_file` set: spans are exported through OpenTelemetry as
///   JSON lines appended to that file. The parent directory is created if
///   missing; if that fails tracing stays off.
/// - otherwise: formatted events go to stderr.
///
/// Safe to call more than once; only the first call installs a subscriber and
/// the global tracer provider. Later calls at most create the trace directory.
///
/// # Example
///
/// ```rust
/// use resource_hub::observability::init_tracing;
/// use resource_hub::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let otel = match &config.trace_file {
        Some(trace_file) => {
            if let Some(parent) = trace_file.parent() {
                if std::fs::create_dir_all(parent).is_err() {
                    return;
                }
            }

            let resource = Resource::new(vec![opentelemetry::KeyValue::new(
                "service.name",
                SERVICE_NAME,
            )]);
            let provider = exporter::create_tracer_provider(trace_file.clone(), resource);
            let layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));
            Some((provider, layer))
        }
        None => None,
    };

    let (provider, otel_layer) = otel.unzip();
    let fmt_layer = otel_layer
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .with(fmt_layer)
        .try_init()
        .is_ok();

    // The global provider belongs to whichever call installed the subscriber.
    if installed {
        if let Some(provider) = provider {
            opentelemetry::global::set_tracer_provider(provider);
        }
    }
}
