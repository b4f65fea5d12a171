//! Incoming HTTP request type.

use std::collections::HashMap;
use std::str::FromStr;

use bytes::Bytes;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::method::Method;

/// An incoming HTTP request with its body already read.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    /// Builds a request by hand, without a connection behind it.
    ///
    /// Path parameters are filled in by the router.
    pub fn new(method: Method, path: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: body.into(),
            params: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Reads the whole body of a hyper request.
    ///
    /// Returns `Ok(None)` for methods outside [`Method`], which no route
    /// can match.
    pub(crate) async fn from_hyper(
        req: hyper::Request<hyper::body::Incoming>,
    ) -> Result<Option<Self>, Error> {
        let Ok(method) = Method::try_from(req.method()) else {
            return Ok(None);
        };
        let path = req.uri().path().to_owned();
        let headers = req.headers().iter()
            .filter_map(|(k, v)| Some((k.as_str().to_owned(), v.to_str().ok()?.to_owned())))
            .collect();
        let body = req.into_body().collect().await?.to_bytes();
        Ok(Some(Self { method, path, headers, body, params: HashMap::new() }))
    }

    /// Stores matched route parameters, percent-decoded.
    pub(crate) fn set_params<'k, 'v>(&mut self, params: impl Iterator<Item = (&'k str, &'v str)>) {
        self.params = params
            .map(|(k, v)| {
                let value = urlencoding::decode(v).map_or_else(|_| v.to_owned(), |d| d.into_owned());
                (k.to_owned(), value)
            })
            .collect();
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &[(String, String)] { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/movies/{id}`, `req.param("id")` on `/movies/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Parses a path parameter, `None` when it is absent or malformed.
    pub fn param_as<T: FromStr>(&self, key: &str) -> Option<T> {
        self.param(key)?.parse().ok()
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}
