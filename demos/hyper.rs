use std::sync::Arc;

use http::Request;
use hyper::body::Incoming;
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use trailhead::{ArcHandler, Body, Error, RequestExt, Response, Router};

// GET /
async fn index(_req: Request<Incoming>) -> Result<Response, Error> {
    Ok(Response::new(Body::from("Hello, world!")))
}

// GET /hello/:name
async fn hello(req: Request<Incoming>) -> Result<Response, Error> {
    let params = req.params().unwrap();
    let body = format!("Hello, {}!", params.get("name").unwrap());
    Ok(Response::new(Body::from(body)))
}

// Logs every matched request and its response status.
fn logger(next: ArcHandler<Incoming>) -> ArcHandler<Incoming> {
    Arc::new(move |req: Request<Incoming>| {
        let next = next.clone();
        async move {
            println!("--> {} {}", req.method(), req.uri().path());
            let res = next.call(req).await;
            if let Ok(res) = &res {
                println!("<-- {}", res.status());
            }
            res
        }
    })
}

#[tokio::main]
async fn main() {
    let mut router = Router::new();
    router.wrap(logger);
    router.get("/", index);
    router.get("/hello/:name", hello);

    let service = router.into_service();

    let listener = TcpListener::bind(("127.0.0.1", 3000)).await.unwrap();
    println!("listening on http://127.0.0.1:3000");

    loop {
        let (tcp, _) = listener.accept().await.unwrap();
        let service = service.clone();
        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(TokioIo::new(tcp), service)
                .await
            {
                println!("Error serving connection: {:?}", err);
            }
        });
    }
}
