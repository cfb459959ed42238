use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const TRACER_NAME: &str = "groupdeliver";

/// Keep the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Runtime for the gRPC exporters. `dioxus::serve` may call the init closure
/// before a Tokio context is entered, and tonic needs one to connect.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

fn tls_config(endpoint: &str) -> Option<opentelemetry_otlp::tonic_types::transport::ClientTlsConfig> {
    endpoint
        .starts_with("https://")
        .then(|| opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots())
}

/// Configure OTLP trace and log export.
///
/// Dioxus owns the `tracing` subscriber, so this only installs the global
/// tracer provider (fed by `OtelTraceLayer`) and bridges the `log` crate.
///
/// Environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address; unset disables export
///   - `OTEL_SERVICE_NAME`: defaults to `groupdeliver`
///   - `DEPLOY_ENV`: defaults to `development`
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let Ok(endpoint) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") else {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
        return;
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| TRACER_NAME.to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let rt = match OTEL_RUNTIME.get() {
        Some(rt) => rt,
        None => {
            let built = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .worker_threads(1)
                .build();
            match built {
                Ok(rt) => OTEL_RUNTIME.get_or_init(|| rt),
                Err(e) => {
                    tracing::warn!(error = %e, "could not start telemetry runtime");
                    return;
                }
            }
        }
    };
    let _guard = rt.enter();

    let mut span_builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);
    if let Some(tls) = tls_config(&endpoint) {
        span_builder = span_builder.with_tls_config(tls);
    }
    let span_exporter = match span_builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::warn!(error = %e, "failed to create OTLP span exporter");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(provider);

    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);
    if let Some(tls) = tls_config(&endpoint) {
        log_builder = log_builder.with_tls_config(tls);
    }
    let log_exporter = match log_builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::warn!(error = %e, "failed to create OTLP log exporter, traces only");
            return;
        }
    };

    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    if log::set_boxed_logger(Box::new(bridge)).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    } else {
        tracing::warn!("log bridge skipped, a logger is already installed");
    }

    tracing::info!(version = APP_VERSION, %endpoint, "telemetry initialized");
}

/// Collapse a request path to a low-cardinality span name.
///
/// Asset fingerprints and server-function hashes become `*`, so
/// `/assets/main-3f9a.css` and `/assets/main-77b2.css` share one span name.
fn route_name(path: &str) -> String {
    if path.starts_with("/assets/") {
        return "/assets/*".to_string();
    }
    if path.starts_with("/api/") && !path.starts_with("/api/v1/") {
        return "/api/*".to_string();
    }
    path.to_string()
}

/// Role the browser is viewing, inferred from the dashboard path.
fn dashboard_role(path: &str) -> Option<&'static str> {
    shared_types::Role::ALL
        .into_iter()
        .find(|role| path.trim_end_matches('/') == role.dashboard_path())
        .map(|role| role.as_str())
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(TRACER_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string()
        };

        let mut attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.user_agent", header("user-agent")),
            KeyValue::new("http.request_id", header("x-request-id")),
        ];
        if let Some(role) = dashboard_role(&path) {
            attributes.push(KeyValue::new("app.dashboard_role", role));
        }

        let span = tracer
            .span_builder(format!("{} {}", &method, route_name(&path)))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}
