//! Request/response logging applied to the whole router.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Builds the HTTP trace layer.
///
/// Every request opens an `INFO` span carrying the method, path and HTTP
/// version. The response event records the status and latency in
/// milliseconds, and 5xx responses additionally log at `ERROR`.
///
/// ```text
/// INFO request{method=GET uri=/Ab3xY9kLm2Qr version=HTTP/1.1}: finished processing request latency=0 ms status=302
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}
