#![allow(dead_code)]

use std::{net::TcpListener, path::Path, time::Duration};

use actix_web::{App, HttpResponse, HttpServer, http::StatusCode, rt, web};
use cotacao::ServerConfig;

pub const UPSTREAM_BODY: &str = r#"{"USDBRL":{"code":"USD","codein":"BRL","name":"Dólar Americano/Real Brasileiro","high":"5.2614","low":"5.2296","varBid":"-0.0038","pctChange":"-0.07","bid":"5.25","ask":"5.2507","timestamp":"1718225998","create_date":"2024-06-12 17:59:58"}}"#;

/// Serves `body` on every path after `delay`, returning the server's base URL.
pub fn spawn_stub(status: StatusCode, body: &'static str, delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(move || {
        App::new().default_service(web::to(move || async move {
            tokio::time::sleep(delay).await;
            HttpResponse::build(status)
                .content_type("application/json")
                .body(body)
        }))
    })
    .workers(1)
    .disable_signals()
    .listen(listener)
    .unwrap()
    .run();
    rt::spawn(server);

    format!("http://{addr}")
}

pub fn spawn_upstream(body: &'static str, delay: Duration) -> String {
    format!("{}/json/last/USD-BRL", spawn_stub(StatusCode::OK, body, delay))
}

pub fn server_config(upstream_url: String, database_path: &Path) -> ServerConfig {
    ServerConfig {
        upstream_url,
        database_path: database_path.to_path_buf(),
        insert_timeout: Duration::from_secs(5),
        ..ServerConfig::default()
    }
}
