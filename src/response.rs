//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Handlers build a [`Response`] (or anything that converts into one) and
//! return it. That is the entire job description.

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};
use http_body_util::Full;

use crate::error::RegistryError;

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK)
///
/// ```rust
/// use genre_registry::Response;
/// use http::StatusCode;
///
/// Response::json(br#"{"id":1}"#.to_vec());
/// Response::text("hello");
/// Response::status(StatusCode::NOT_FOUND);
/// ```
///
/// # Builder (custom status with a body)
///
/// ```rust
/// use genre_registry::Response;
/// use http::StatusCode;
///
/// Response::builder()
///     .status(StatusCode::BAD_REQUEST)
///     .text("\"name\" is required");
/// ```
pub struct Response {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Bytes,
}

impl Response {
    /// `200 OK` — `application/json`.
    ///
    /// Takes bytes straight from the serializer: `serde_json::to_vec(&val)`.
    pub fn json(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some("application/json"),
            body: body.into(),
        }
    }

    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some("text/plain; charset=utf-8"),
            body: body.into().into_bytes().into(),
        }
    }

    /// Response with no body.
    pub fn status(status: StatusCode) -> Self {
        Self { status, content_type: None, body: Bytes::new() }
    }

    /// Builder for responses that need a non-200 status plus a body.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { status: StatusCode::OK }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Converts into the `http`/hyper representation the connection writes.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(self.body));
        *res.status_mut() = self.status;
        if let Some(ct) = self.content_type {
            res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        res
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`]. Defaults to `200 OK`; terminated by a
/// typed body method.
pub struct ResponseBuilder {
    status: StatusCode,
}

impl ResponseBuilder {
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Terminate with a JSON body (`application/json`).
    pub fn json(self, body: Vec<u8>) -> Response {
        let mut res = Response::json(body);
        res.status = self.status;
        res
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        let mut res = Response::text(body);
        res.status = self.status;
        res
    }

    /// Terminate with no body.
    pub fn no_body(self) -> Response {
        Response::status(self.status)
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implemented for the types handlers actually return, so a handler can be
/// written as `async fn(..) -> Result<Response, RegistryError>` and let `?`
/// do the error plumbing.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        Response::status(self)
    }
}

/// Registry failures become the two plain-text error responses the service
/// defines: `404` for an unknown id, `400` for a rejected payload.
impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
        };
        Response::builder().status(status).text(self.to_string())
    }
}

impl<T, E> IntoResponse for Result<T, E>
where
    T: IntoResponse,
    E: IntoResponse,
{
    fn into_response(self) -> Response {
        match self {
            Ok(value) => value.into_response(),
            Err(error) => error.into_response(),
        }
    }
}
