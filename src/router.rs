//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path,
//! you get a handler. That is all.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};

/// The application router.
///
/// Built once at startup and shared (behind an `Arc`) by every connection
/// task. Each registration method returns `self` so routes chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::GET, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::POST, path, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::PUT, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::DELETE, path, handler)
    }

    /// Register a handler for a method + path pair. Path parameters use
    /// `{name}` syntax; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route pattern. Routes are registered
    /// at startup, so a bad pattern fails the process before it serves.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::ErasedHandler;
    use crate::registry::{Registry, SharedRegistry};
    use crate::request::Request;
    use crate::response::Response;

    async fn noop(_req: Request, _registry: SharedRegistry) -> Response {
        Response::text("ok")
    }

    fn request(path: &str, params: HashMap<String, String>) -> Request {
        Request::new(Method::GET, path.to_owned(), bytes::Bytes::new(), params)
    }

    #[tokio::test]
    async fn lookup_matches_method_and_path() {
        let router = Router::new().get("/api/genres", noop);
        assert!(router.lookup(&Method::GET, "/api/genres").is_some());
        assert!(router.lookup(&Method::POST, "/api/genres").is_none());
        assert!(router.lookup(&Method::GET, "/api/films").is_none());
    }

    #[tokio::test]
    async fn lookup_extracts_path_parameters() {
        let router = Router::new().get("/api/genres/{id}", noop);
        let (handler, params) = router.lookup(&Method::GET, "/api/genres/7").unwrap();
        assert_eq!(params["id"], "7");

        let res = handler.call(request("/api/genres/7", params), Registry::seeded()).await;
        assert_eq!(res.status_code(), http::StatusCode::OK);
    }

    #[test]
    fn static_and_parameter_routes_coexist() {
        let router = Router::new()
            .get("/api/genres/", noop)
            .get("/api/genres/{id}", noop);
        let (_, params) = router.lookup(&Method::GET, "/api/genres/").unwrap();
        assert!(params.is_empty());
        let (_, params) = router.lookup(&Method::GET, "/api/genres/3").unwrap();
        assert_eq!(params["id"], "3");
    }
}
