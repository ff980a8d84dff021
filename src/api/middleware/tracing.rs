//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Logs at `DEBUG` level
/// - Creates a span at `INFO` level with:
///   - HTTP method
///   - URI path
///   - HTTP version
///
/// **On Response:**
/// - Logs at `INFO` level with:
///   - Status code
///   - Latency in milliseconds
///
/// # Example Logs
///
/// ```text
/// DEBUG request{method=GET uri=/packages/source/r/requests/requests-2.0.tar.gz version=HTTP/1.1}: started processing request
/// INFO request{method=GET uri=/packages/source/r/requests/requests-2.0.tar.gz version=HTTP/1.1}: finished processing request latency=48 ms status=302
/// ```
///
/// # Integration
///
/// Applied once in [`crate::routes::app_router`], outside the route table so
/// every request (including unmatched paths) gets a span:
///
/// ```rust,ignore
/// let router = Router::new()
///     .merge(api::routes::public_routes())
///     .with_state(state)
///     .layer(tracing::layer());
///
/// NormalizePathLayer::trim_trailing_slash().layer(router)
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
