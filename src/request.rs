//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::Method;

/// An incoming HTTP request, with its body already collected.
///
/// Built by the server once hyper has delivered the full body; handlers see
/// plain bytes and never touch the transport.
pub struct Request {
    method: Method,
    path: String,
    body: Bytes,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: String,
        body: Bytes,
        params: HashMap<String, String>,
    ) -> Self {
        Self { method, path, body, params }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/api/genres/{id}`, `req.param("id")` on `/api/genres/42`
    /// returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_lookup() {
        let params = HashMap::from([("id".to_owned(), "42".to_owned())]);
        let req = Request::new(Method::GET, "/api/genres/42".to_owned(), Bytes::new(), params);
        assert_eq!(req.param("id"), Some("42"));
        assert_eq!(req.param("name"), None);
    }
}
