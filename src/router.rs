//! The router and its serving half.
//!
//! [`Router`] is the registration phase: routes and middleware are collected
//! while the process starts up. [`Router::into_service`] then freezes the
//! configuration into a [`RouterService`], a cheaply cloneable, read-only
//! dispatcher that can be handed to every connection task. Nothing can be
//! registered after the split, so serving needs no synchronization.
//!
//! Dispatch resolves the request method to its tree, the path to a handler,
//! attaches any captured parameters to the request extensions, and invokes
//! the handler wrapped in the registered middleware, first-registered
//! outermost. Any request that does not resolve to a handler is answered
//! with an empty `404 Not Found`.

use std::collections::HashMap;
use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::future::{ready, BoxFuture};
use http::{Method, Request, StatusCode};
use hyper::body::Incoming;

use crate::handler::{ArcHandler, Handler, Middleware};
use crate::tree::Node;
use crate::{Body, Error, Response};

/// A request router under construction.
///
/// `Router` is generic over the request body type `B`, defaulting to
/// [`hyper::body::Incoming`] for use behind a hyper server. Registration
/// accepts methods and paths as-is: there is no path validation, and
/// registering the same method and path twice silently replaces the
/// previous handler.
pub struct Router<B = Incoming> {
    trees: HashMap<Method, Node<ArcHandler<B>>>,
    middlewares: Vec<Arc<dyn Middleware<B>>>,
}

impl<B> Default for Router<B> {
    fn default() -> Self {
        Self {
            trees: HashMap::new(),
            middlewares: Vec::new(),
        }
    }
}

impl<B> Router<B> {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for the given method and path.
    ///
    /// The tree for `method` is created on first use. Path syntax is
    /// described at the [crate root](crate).
    pub fn handle(&mut self, method: Method, path: &str, handler: impl Handler<B> + 'static) {
        self.trees
            .entry(method)
            .or_default()
            .insert(path, Arc::new(handler));
    }

    /// Registers a handler for `GET` requests.
    pub fn get(&mut self, path: &str, handler: impl Handler<B> + 'static) {
        self.handle(Method::GET, path, handler);
    }

    /// Registers a handler for `HEAD` requests.
    pub fn head(&mut self, path: &str, handler: impl Handler<B> + 'static) {
        self.handle(Method::HEAD, path, handler);
    }

    /// Registers a handler for `OPTIONS` requests.
    pub fn options(&mut self, path: &str, handler: impl Handler<B> + 'static) {
        self.handle(Method::OPTIONS, path, handler);
    }

    /// Registers a handler for `POST` requests.
    pub fn post(&mut self, path: &str, handler: impl Handler<B> + 'static) {
        self.handle(Method::POST, path, handler);
    }

    /// Registers a handler for `PUT` requests.
    pub fn put(&mut self, path: &str, handler: impl Handler<B> + 'static) {
        self.handle(Method::PUT, path, handler);
    }

    /// Registers a handler for `PATCH` requests.
    pub fn patch(&mut self, path: &str, handler: impl Handler<B> + 'static) {
        self.handle(Method::PATCH, path, handler);
    }

    /// Registers a handler for `DELETE` requests.
    pub fn delete(&mut self, path: &str, handler: impl Handler<B> + 'static) {
        self.handle(Method::DELETE, path, handler);
    }

    /// Appends a middleware to the stack.
    ///
    /// Middleware runs around every matched handler in registration order:
    /// the first middleware registered sees the request first and the
    /// response last. Middleware does not run for unmatched requests.
    pub fn wrap(&mut self, middleware: impl Middleware<B> + 'static) {
        self.middlewares.push(Arc::new(middleware));
    }

    /// Freezes the router into a shareable dispatch service.
    pub fn into_service(self) -> RouterService<B> {
        RouterService {
            inner: Arc::new(self),
        }
    }
}

/// The read-only serving half of a [`Router`].
///
/// Cloning is cheap (an `Arc` bump), so one `RouterService` can be cloned
/// into every connection task. It implements both [`tower::Service`] and
/// [`hyper::service::Service`], so it can be passed straight to
/// `serve_connection`.
pub struct RouterService<B = Incoming> {
    inner: Arc<Router<B>>,
}

impl<B> Clone for RouterService<B> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<B> RouterService<B> {
    /// Resolves `req` to a handler and invokes it through the middleware
    /// stack, or responds with `404 Not Found`.
    pub fn dispatch(&self, mut req: Request<B>) -> BoxFuture<'static, Result<Response, Error>> {
        let Some(root) = self.inner.trees.get(req.method()) else {
            debug!("{} {}: no routes for method", req.method(), req.uri().path());
            return Box::pin(ready(Ok(not_found())));
        };

        let matched = match root.at(req.uri().path()) {
            Ok(matched) => matched,
            Err(_) => {
                debug!("{} {}: no matching route", req.method(), req.uri().path());
                return Box::pin(ready(Ok(not_found())));
            }
        };

        trace!(
            "{} {}: matched with {} params",
            req.method(),
            req.uri().path(),
            matched.params.len()
        );

        let mut handler = matched.value.clone();
        if !matched.params.is_empty() {
            req.extensions_mut().insert(matched.params);
        }

        // First-registered middleware ends up outermost.
        for middleware in self.inner.middlewares.iter().rev() {
            handler = middleware.wrap(handler);
        }

        handler.call(req)
    }
}

impl<B> tower::Service<Request<B>> for RouterService<B> {
    type Response = Response;
    type Error = Error;
    type Future = BoxFuture<'static, Result<Response, Error>>;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        self.dispatch(req)
    }
}

impl<B> hyper::service::Service<Request<B>> for RouterService<B> {
    type Response = Response;
    type Error = Error;
    type Future = BoxFuture<'static, Result<Response, Error>>;

    fn call(&self, req: Request<B>) -> Self::Future {
        self.dispatch(req)
    }
}

fn not_found() -> Response {
    http::Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::new(Bytes::new()))
        .unwrap()
}
