//! Request logging.

use std::time::Duration;

use tracing::{info, warn};

use crate::status::Status;

/// Emits one event for a finished request. Server errors log at `warn`.
///
/// `method` is the raw wire method, so unroutable ones are logged too.
pub fn record(method: &str, path: &str, status: Status, latency: Duration) {
    let code = u16::from(status);
    let latency_us = latency.as_micros() as u64;
    if code >= 500 {
        warn!(%method, path, status = code, latency_us, "request failed");
    } else {
        info!(%method, path, status = code, latency_us, "request");
    }
}
