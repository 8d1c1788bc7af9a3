use async_trait::async_trait;
use models::Student;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};
use service::{errors::ServiceError, SeedSource};

// Prometheus metrics (default registry)
pub static SEED_FETCH_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "students_seed_fetch_total",
        "Total remote seed fetch attempts"
    )
    .expect("register seed_fetch_total")
});

pub static SEED_FETCH_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "students_seed_fetch_errors_total",
        "Total failed remote seed fetches"
    )
    .expect("register seed_fetch_errors_total")
});

pub static STUDENTS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "students_created_total",
        "Total students created through the API"
    )
    .expect("register students_created_total")
});

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

/// Seed source wrapper counting fetch attempts and failures.
pub struct MeteredSeedSource<S> {
    inner: S,
}

impl<S> MeteredSeedSource<S> {
    pub fn new(inner: S) -> Self { Self { inner } }
}

#[async_trait]
impl<S: SeedSource> SeedSource for MeteredSeedSource<S> {
    async fn fetch(&self) -> Result<Vec<Student>, ServiceError> {
        SEED_FETCH_TOTAL.inc();
        self.inner
            .fetch()
            .await
            .inspect_err(|_| SEED_FETCH_ERRORS_TOTAL.inc())
    }
}
