//! Logging utilities for shortest-path queries.
//!
//! Provides structured logging for query start, completion, and validation
//! errors. With the `tracing` feature enabled, events go through the
//! `tracing` crate; otherwise they fall back to stderr.

use crate::error::RouteError;
use crate::route::Route;

/// Log the start of a shortest-path query.
pub fn log_query_start(source: &str, destination: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(source, destination, "Starting shortest-path query");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[DEBUG] Starting shortest-path query: {} -> {}",
        source, destination
    );
}

/// Log a completed query. `route` is `None` when the destination turned out
/// to be unreachable.
pub fn log_query_complete(source: &str, destination: &str, route: Option<&Route>) {
    #[cfg(feature = "tracing")]
    match route {
        Some(r) => tracing::info!(
            source,
            destination,
            total_distance = r.total_distance,
            hops = r.path.len(),
            "Query complete"
        ),
        None => tracing::info!(source, destination, "Query complete: no path"),
    }

    #[cfg(not(feature = "tracing"))]
    match route {
        Some(r) => eprintln!(
            "[INFO] Query complete: {} -> {} distance {}",
            source, destination, r.total_distance
        ),
        None => eprintln!(
            "[INFO] Query complete: {} -> {} no path",
            source, destination
        ),
    }
}

/// Log a query validation error.
pub fn log_query_error(error: &RouteError) {
    #[cfg(feature = "tracing")]
    tracing::error!(?error, "Query error");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[ERROR] Query error: {:?}", error);
}
