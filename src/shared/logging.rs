//! Structured logging for the orders front-end
//!
//! Every event carries an `operation` field so fetches and route resolution
//! can be filtered independently.

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    OrderFetch,
    RouteResolve,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::OrderFetch => "order_fetch",
            LogOperation::RouteResolve => "route_resolve",
        }
    }
}

/// Install the native subscriber. `RUST_LOG` refines the INFO default.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    // A second init (tests, desktop hot reload) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Log an outgoing order request
pub fn log_fetch_start(endpoint: &str, url: &str) {
    tracing::debug!(
        operation = LogOperation::OrderFetch.as_str(),
        endpoint = endpoint,
        url = url,
        "Fetching orders"
    );
}

pub fn log_fetch_success(endpoint: &str, url: &str) {
    tracing::debug!(
        operation = LogOperation::OrderFetch.as_str(),
        endpoint = endpoint,
        url = url,
        "Orders fetched"
    );
}

/// Log a failure that is returned to the caller
pub fn log_fetch_error(endpoint: &str, url: &str, error: &str) {
    tracing::debug!(
        operation = LogOperation::OrderFetch.as_str(),
        endpoint = endpoint,
        url = url,
        error = error,
        "Order fetch failed"
    );
}

/// Log a failure that the caller will never see
pub fn log_fetch_error_discarded(endpoint: &str, url: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::OrderFetch.as_str(),
        endpoint = endpoint,
        url = url,
        error = error,
        "Order fetch failed, returning no value"
    );
}

pub fn log_route_resolved(path: &str, component: &str) {
    tracing::trace!(
        operation = LogOperation::RouteResolve.as_str(),
        path = path,
        component = component,
        "Route resolved"
    );
}

pub fn log_route_not_found(path: &str) {
    tracing::debug!(
        operation = LogOperation::RouteResolve.as_str(),
        path = path,
        "No route matched, rendering not-found page"
    );
}
