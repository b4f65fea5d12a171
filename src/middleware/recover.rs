//! Panic recovery.

use tracing::error;

use crate::handler::BoxFuture;
use crate::response::Response;
use crate::status::Status;

/// Drives a handler future on its own task so a panic inside it surfaces as
/// a [`JoinError`](tokio::task::JoinError) rather than unwinding through the
/// connection.
pub async fn catch(fut: BoxFuture) -> Response {
    match tokio::spawn(fut).await {
        Ok(response) => response,
        Err(e) if e.is_panic() => {
            error!("handler panicked: {e}");
            Response::status(Status::InternalServerError)
        }
        Err(e) => {
            error!("handler task cancelled: {e}");
            Response::status(Status::ServiceUnavailable)
        }
    }
}
