//! # marquee
//!
//! An in-memory movie catalog served over HTTP.
//!
//! The catalog is a single [`MovieStore`] shared by every request. It can
//! list all movies, add one, filter by release year, filter by director
//! (case-insensitive substring) and delete by entry number. Nothing is
//! persisted.
//!
//! The HTTP side is a small hyper-based framework:
//!
//! - Radix-tree routing via [`matchit`], one tree per [`Method`]
//! - Handlers are plain `async fn(Arc<S>, Request) -> impl IntoResponse`
//! - Panic recovery and per-request logging around every handler
//! - Graceful shutdown on SIGTERM / Ctrl-C
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use marquee::{api, MovieStore, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), marquee::Error> {
//!     let app = api::routes(Arc::new(MovieStore::seeded()));
//!     Server::bind("localhost:8082").await?.serve(app).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod api;
pub mod config;
pub mod health;
pub mod middleware;
pub mod movie;
pub mod store;

pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use movie::Movie;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
pub use store::MovieStore;
