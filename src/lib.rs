//! `trailhead` is a lightweight HTTP request router with middleware support.
//!
//! The router matches incoming requests by method and path. Routes are stored
//! in a trie keyed by path segments, one tree per HTTP method, so lookup cost
//! is proportional to the number of segments in the request path.
//!
//! The registered path can contain named parameters:
//! ```ignore
//!  Syntax    Type
//!  :name     named parameter
//! ```
//!
//! Named parameters are dynamic path segments. They match any single segment:
//! ```ignore
//!  Path: /blog/:category/:post
//! ```
//!
//! Requests:
//! ```ignore
//!   /blog/rust/request-routers      match: category="rust", post="request-routers"
//!   /blog/rust                      no match
//!   /blog/rust/routers/comments     no match
//! ```
//!
//! A literal segment always takes precedence over a parameter at the same
//! depth, so `/users/me` can be registered alongside `/users/:id`.
//!
//! Captured parameters are attached to the request extensions and retrieved
//! with [`RequestExt::params`]. Middleware registered with [`Router::wrap`]
//! runs around every matched handler, first-registered outermost.
//!
//! ```rust,no_run
//! use http::Request;
//! use hyper::body::Incoming;
//! use trailhead::{Body, Error, RequestExt, Response, Router};
//!
//! async fn index(_: Request<Incoming>) -> Result<Response, Error> {
//!     Ok(Response::new(Body::from("Hello, World!")))
//! }
//!
//! async fn hello(req: Request<Incoming>) -> Result<Response, Error> {
//!     let params = req.params().unwrap();
//!     let body = format!("Hello, {}!", params.get("name").unwrap());
//!     Ok(Response::new(Body::from(body)))
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut router = Router::new();
//!     router.get("/", index);
//!     router.get("/hello/:name", hello);
//!
//!     let service = router.into_service();
//!     let listener = tokio::net::TcpListener::bind(("127.0.0.1", 3000)).await.unwrap();
//!     loop {
//!         let (tcp, _) = listener.accept().await.unwrap();
//!         let service = service.clone();
//!         tokio::task::spawn(async move {
//!             let _ = hyper::server::conn::http1::Builder::new()
//!                 .serve_connection(hyper_util::rt::TokioIo::new(tcp), service)
//!                 .await;
//!         });
//!     }
//! }
//! ```
#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handler;
pub mod params;
pub mod router;
pub mod tree;

#[macro_use]
extern crate log;

pub use error::MatchError;
pub use handler::{ArcHandler, Handler, Middleware};
pub use params::{Params, RequestExt};
pub use router::{Router, RouterService};
pub use tree::{Match, Node};

/// The response body type produced by this crate.
pub type Body = http_body_util::Full<bytes::Bytes>;

/// The response type returned by handlers.
pub type Response = http::Response<Body>;

/// The error type handlers and middleware may return.
pub type Error = Box<dyn std::error::Error + Send + Sync>;
