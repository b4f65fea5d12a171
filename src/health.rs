//! Health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Can the catalog serve traffic? |
//!
//! Both are generic over the router state so any [`Router`](crate::Router)
//! can mount them:
//!
//! ```rust
//! use std::sync::Arc;
//! use marquee::{health, Method, MovieStore, Router};
//!
//! let app = Router::new(Arc::new(MovieStore::seeded()))
//!     .on(Method::Get, "/healthz", health::liveness::<MovieStore>)
//!     .on(Method::Get, "/readyz", health::readiness::<MovieStore>);
//! ```

use std::sync::Arc;

use crate::{Request, Response};

/// Liveness probe. Always `200 OK` with body `"ok"`.
pub async fn liveness<S>(_state: Arc<S>, _req: Request) -> Response {
    Response::text("ok")
}

/// Readiness probe. `200 OK` with body `"ready"`; the catalog lives in
/// memory, so it is ready as soon as it can answer.
pub async fn readiness<S>(_state: Arc<S>, _req: Request) -> Response {
    Response::text("ready")
}
