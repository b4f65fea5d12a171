//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path,
//! you get a handler, and the handler gets the shared state.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxFuture, BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{recover, trace};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Owns the shared state `S` every handler receives. Build it once at
/// startup and pass it to [`Server::serve`](crate::Server::serve).
pub struct Router<S> {
    state: Arc<S>,
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
}

impl<S: Send + Sync + 'static> Router<S> {
    pub fn new(state: Arc<S>) -> Self {
        Self { state, routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax and are read back with
    /// [`Request::param`].
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or overlaps one already
    /// registered for `method`.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    pub fn state(&self) -> &Arc<S> {
        &self.state
    }

    /// Runs one request through routing, panic recovery and request logging.
    pub async fn handle(&self, req: Request) -> Response {
        let started = Instant::now();
        let method = req.method();
        let path = req.path().to_owned();

        let response = match self.route(req) {
            Route::Found(fut) => recover::catch(fut).await,
            Route::Redirect(location) => redirect(method, &location),
            Route::Missing => not_found(),
        };

        trace::record(method.as_str(), &path, response.status_code(), started.elapsed());
        response
    }

    fn route(&self, mut req: Request) -> Route {
        let Some(tree) = self.routes.get(&req.method) else {
            return Route::Missing;
        };
        let path = req.path.clone();
        match tree.at(&path) {
            Ok(matched) => {
                req.set_params(matched.params.iter());
                Route::Found(matched.value.call(Arc::clone(&self.state), req))
            }
            Err(_) => match trailing_slash_twin(&path) {
                Some(twin) if tree.at(&twin).is_ok() => Route::Redirect(twin),
                _ => Route::Missing,
            },
        }
    }
}

enum Route {
    Found(BoxFuture),
    Redirect(String),
    Missing,
}

/// `path` with one trailing slash removed, or added when it has none.
fn trailing_slash_twin(path: &str) -> Option<String> {
    match path.strip_suffix('/') {
        Some("") => None,
        Some(trimmed) => Some(trimmed.to_owned()),
        None => Some(format!("{path}/")),
    }
}

/// `GET` is redirected with 301; other methods get 307 so clients repeat
/// the method and body.
fn redirect(method: Method, location: &str) -> Response {
    let status = match method {
        Method::Get => Status::MovedPermanently,
        _ => Status::TemporaryRedirect,
    };
    Response::builder().status(status).header("location", location).no_body()
}

/// The answer for any method + path pair with no route.
pub(crate) fn not_found() -> Response {
    Response::builder().status(Status::NotFound).text("404 page not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::IntoResponse;

    async fn echo(state: Arc<String>, req: Request) -> Response {
        let id = req.param("id").unwrap_or("none");
        Response::text(format!("{state}:{id}"))
    }

    async fn explode(_: Arc<String>, _: Request) -> Response {
        panic!("handler bug");
    }

    fn router() -> Router<String> {
        Router::new(Arc::new("state".to_owned()))
            .on(Method::Get, "/items/{id}", echo)
            .on(Method::Get, "/boom", explode)
    }

    #[tokio::test]
    async fn routes_with_state_and_params() {
        let res = router().handle(Request::new(Method::Get, "/items/7", "")).await;
        assert_eq!(res.status_code(), Status::Ok);
        assert_eq!(res.body(), b"state:7");
    }

    #[tokio::test]
    async fn unmatched_method_or_path_is_not_found() {
        let router = router();
        for req in [
            Request::new(Method::Post, "/items/7", ""),
            Request::new(Method::Get, "/nowhere", ""),
        ] {
            let res = router.handle(req).await;
            assert_eq!(res.status_code(), Status::NotFound);
            assert_eq!(res.body(), b"404 page not found");
        }
    }

    #[tokio::test]
    async fn trailing_slash_redirects_to_the_route() {
        let res = router().handle(Request::new(Method::Get, "/items/7/", "")).await;
        assert_eq!(res.status_code(), Status::MovedPermanently);
        assert_eq!(res.header("location"), Some("/items/7"));
        assert!(res.body().is_empty());

        let res = router().handle(Request::new(Method::Get, "/boom/", "")).await;
        assert_eq!(res.header("location"), Some("/boom"));
    }

    #[tokio::test]
    async fn missing_trailing_slash_redirects_when_only_slashed_route_exists() {
        let router = Router::new(Arc::new(String::new()))
            .on(Method::Post, "/things/", echo);
        let res = router.handle(Request::new(Method::Post, "/things", "")).await;
        assert_eq!(res.status_code(), Status::TemporaryRedirect);
        assert_eq!(res.header("location"), Some("/things/"));
    }

    #[tokio::test]
    async fn root_slash_is_not_redirected() {
        let res = router().handle(Request::new(Method::Get, "/", "")).await;
        assert_eq!(res.status_code(), Status::NotFound);
    }

    #[tokio::test]
    async fn panicking_handler_becomes_500() {
        let res = router().handle(Request::new(Method::Get, "/boom", "")).await;
        assert_eq!(res.status_code(), Status::InternalServerError);
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic() {
        let _ = router().on(Method::Get, "/items/{other}", |_: Arc<String>, _: Request| async {
            Status::Ok.into_response()
        });
    }
}
