// tests/support/helpers.rs
use axum::body;
use axum::http::StatusCode;
use axum::response::Response;
use once_cell::sync::Lazy;
use serde_json::Value;
use store_errors::{ErrorNormalizer, MalformedCompoundIndex, NormalizerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static FATAL: Lazy<ErrorNormalizer> =
    Lazy::new(|| store_errors::build_normalizer(NormalizerConfig::default()));

static SINGLE_FIELD_FALLBACK: Lazy<ErrorNormalizer> = Lazy::new(|| {
    store_errors::build_normalizer(NormalizerConfig::new(MalformedCompoundIndex::SingleField))
});

/// Normalizer with the default (fatal) malformed compound-index policy.
pub fn normalizer() -> &'static ErrorNormalizer {
    init_tracing();
    &FATAL
}

/// Normalizer that retries malformed compound-index messages as single-field.
pub fn fallback_normalizer() -> &'static ErrorNormalizer {
    init_tracing();
    &SINGLE_FIELD_FALLBACK
}

/// Route normalizer logs to the test harness; filter with RUST_LOG.
pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "store_errors=debug".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_test_writer());

    // Already installed by an earlier test in this binary.
    let _ = subscriber.try_init();
}

pub async fn response_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read response body");
    let json = serde_json::from_slice(&bytes).expect("response body is JSON");
    (status, json)
}
