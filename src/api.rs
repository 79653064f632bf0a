//! Route handlers: the genre CRUD surface plus health probes.
//!
//! Handlers stay thin — parse the request, call one registry operation, map
//! the result. Every registry failure converts to its response through
//! [`RegistryError`]'s `IntoResponse` impl, so `?` is the whole error path.

use serde::Serialize;
use serde_json::Value;

use crate::error::RegistryError;
use crate::registry::SharedRegistry;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// Builds the application router with every route registered.
///
/// Collection paths are registered with and without the trailing slash;
/// clients have always used both forms.
pub fn routes() -> Router {
    Router::new()
        .get("/api/genres", list)
        .get("/api/genres/", list)
        .post("/api/genres", create)
        .post("/api/genres/", create)
        .get("/api/genres/{id}", get)
        .put("/api/genres/{id}", update)
        .delete("/api/genres/{id}", delete)
        .get("/healthz", liveness)
        .get("/readyz", readiness)
}

// ── Genre CRUD ────────────────────────────────────────────────────────────────

/// GET /api/genres/ — the full collection, insertion order.
async fn list(_req: Request, registry: SharedRegistry) -> Response {
    json(&registry.list())
}

/// GET /api/genres/{id}
async fn get(req: Request, registry: SharedRegistry) -> Result<Response, RegistryError> {
    let genre = registry.get(genre_id(&req)?)?;
    Ok(json(&genre))
}

/// POST /api/genres/
async fn create(req: Request, registry: SharedRegistry) -> Result<Response, RegistryError> {
    let genre = registry.create(&parse_body(&req)?)?;
    Ok(json(&genre))
}

/// PUT /api/genres/{id}
async fn update(req: Request, registry: SharedRegistry) -> Result<Response, RegistryError> {
    let id = genre_id(&req)?;
    let genre = registry.update(id, &parse_body(&req)?)?;
    Ok(json(&genre))
}

/// DELETE /api/genres/{id} — returns the remaining collection.
async fn delete(req: Request, registry: SharedRegistry) -> Result<Response, RegistryError> {
    let remaining = registry.delete(genre_id(&req)?)?;
    Ok(json(&remaining))
}

// ── Health probes ─────────────────────────────────────────────────────────────

/// Liveness: if the process can respond to HTTP at all, it is alive.
async fn liveness(_req: Request, _registry: SharedRegistry) -> Response {
    Response::text("ok")
}

/// Readiness: the registry is seeded in memory before the listener opens,
/// so a responding process is always ready.
async fn readiness(_req: Request, _registry: SharedRegistry) -> Response {
    Response::text("ready")
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Parses the `{id}` path parameter. A non-numeric id cannot match any
/// genre, so it behaves exactly like an unknown one.
fn genre_id(req: &Request) -> Result<u32, RegistryError> {
    req.param("id")
        .and_then(|raw| raw.parse().ok())
        .ok_or(RegistryError::NotFound)
}

/// Parses the request body as a JSON value; the registry validates the
/// fields, this only rejects bodies that are not JSON at all.
fn parse_body(req: &Request) -> Result<Value, RegistryError> {
    serde_json::from_slice(req.body())
        .map_err(|_| RegistryError::invalid("request body must be valid JSON"))
}

fn json<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(bytes) => Response::json(bytes),
        Err(_) => Response::status(http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
