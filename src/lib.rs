//! # genre-registry
//!
//! A small HTTP service over a single in-memory collection of genres.
//! Nothing more. Nothing less.
//!
//! ## The shape of it
//!
//! One resource type (`Genre`: an id and a name), one ordered collection,
//! five operations. The collection lives in process memory behind a single
//! mutex and is re-seeded on every restart — there is deliberately no
//! database, no auth, no pagination.
//!
//! The HTTP plumbing is part of the crate and stays thin:
//!
//! - Radix-tree routing — O(path-length) lookup via [`matchit`]
//! - Async I/O — tokio + hyper, HTTP/1.1 and HTTP/2
//! - Graceful shutdown — SIGTERM / Ctrl-C, drains in-flight requests
//!
//! ## Surface
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/api/genres/` | 200, all genres |
//! | GET | `/api/genres/{id}` | 200, one genre |
//! | POST | `/api/genres/` | 200, created genre |
//! | PUT | `/api/genres/{id}` | 200, updated genre |
//! | DELETE | `/api/genres/{id}` | 200, remaining genres |
//!
//! Unknown ids are `404`, rejected payloads are `400`, both with a
//! plain-text message. `/healthz` and `/readyz` answer liveness and
//! readiness probes.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use genre_registry::{api, Registry, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = Registry::seeded();
//!     Server::bind("0.0.0.0:3000")
//!         .serve(api::routes(), registry)
//!         .await
//!         .expect("server error");
//! }
//! ```

mod config;
mod error;
mod genre;
mod handler;
mod registry;
mod request;
mod response;
mod router;
mod server;

pub mod api;

pub use config::Config;
pub use error::{Error, RegistryError};
pub use genre::Genre;
pub use handler::Handler;
pub use registry::{Registry, SharedRegistry};
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
