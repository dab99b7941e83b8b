//! # Metrics
//!
//! Prometheus metrics for the provider.
//!
//! ## Metrics Exposed
//!
//! - `provider_aws_data_source_reads_total` - Data source reads by data source type
//! - `provider_aws_data_source_read_errors_total` - Failed data source reads by data source type
//! - `provider_aws_api_operations_total` - Remote API calls by service and operation
//! - `provider_aws_api_operation_errors_total` - Failed remote API calls by service and operation
//! - `provider_aws_api_operation_duration_seconds` - Duration of remote API calls
//! - `provider_aws_validation_failures_total` - Validator runs that reported errors

use anyhow::Result;
use prometheus::{Encoder, HistogramVec, IntCounter, IntCounterVec, Registry, TextEncoder};
use std::sync::LazyLock;

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static DATA_SOURCE_READS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "provider_aws_data_source_reads_total",
            "Total number of data source reads",
        ),
        &["data_source"],
    )
    .expect("Failed to create DATA_SOURCE_READS_TOTAL metric - this should never happen")
});

static DATA_SOURCE_READ_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "provider_aws_data_source_read_errors_total",
            "Total number of data source reads that returned error diagnostics",
        ),
        &["data_source"],
    )
    .expect("Failed to create DATA_SOURCE_READ_ERRORS_TOTAL metric - this should never happen")
});

static API_OPERATIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "provider_aws_api_operations_total",
            "Total number of remote API operations",
        ),
        &["service", "operation"],
    )
    .expect("Failed to create API_OPERATIONS_TOTAL metric - this should never happen")
});

static API_OPERATION_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "provider_aws_api_operation_errors_total",
            "Total number of failed remote API operations",
        ),
        &["service", "operation"],
    )
    .expect("Failed to create API_OPERATION_ERRORS_TOTAL metric - this should never happen")
});

static API_OPERATION_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    HistogramVec::new(
        prometheus::HistogramOpts::new(
            "provider_aws_api_operation_duration_seconds",
            "Duration of remote API operations in seconds",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0]),
        &["service", "operation"],
    )
    .expect("Failed to create API_OPERATION_DURATION metric - this should never happen")
});

static VALIDATION_FAILURES_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "provider_aws_validation_failures_total",
        "Total number of validator runs that reported errors",
    )
    .expect("Failed to create VALIDATION_FAILURES_TOTAL metric - this should never happen")
});

#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn register_metrics() -> Result<()> {
    REGISTRY.register(Box::new(DATA_SOURCE_READS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(DATA_SOURCE_READ_ERRORS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(API_OPERATIONS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(API_OPERATION_ERRORS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(API_OPERATION_DURATION.clone()))?;
    REGISTRY.register(Box::new(VALIDATION_FAILURES_TOTAL.clone()))?;

    Ok(())
}

/// Render every registered metric in the Prometheus text format
pub fn gather_text() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

pub fn increment_data_source_reads(data_source: &str) {
    DATA_SOURCE_READS_TOTAL.with_label_values(&[data_source]).inc();
}

pub fn increment_data_source_read_errors(data_source: &str) {
    DATA_SOURCE_READ_ERRORS_TOTAL
        .with_label_values(&[data_source])
        .inc();
}

pub fn record_api_operation(service: &str, operation: &str, duration: f64) {
    API_OPERATIONS_TOTAL
        .with_label_values(&[service, operation])
        .inc();
    API_OPERATION_DURATION
        .with_label_values(&[service, operation])
        .observe(duration);
}

pub fn increment_api_operation_errors(service: &str, operation: &str) {
    API_OPERATION_ERRORS_TOTAL
        .with_label_values(&[service, operation])
        .inc();
}

pub fn increment_validation_failures() {
    VALIDATION_FAILURES_TOTAL.inc();
}
