mod common;

use std::time::Duration;

use actix_web::{App, http::StatusCode, test, web};
use cotacao::{RateReply, ServerConfig, Storage, server};
use tempfile::TempDir;

use common::{UPSTREAM_BODY, server_config, spawn_upstream};

macro_rules! rate_app {
    ($config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(server::AppState::new(&$config).unwrap()))
                .configure(server::routes),
        )
        .await
    };
}

#[actix_web::test]
async fn rate_path_serves_upstream_bid_and_persists_it() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("cotacao.db");
    let app = rate_app!(server_config(spawn_upstream(UPSTREAM_BODY, Duration::ZERO), &db));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/cotacao").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );
    let reply: RateReply = test::read_body_json(resp).await;
    assert_eq!(reply, RateReply::new("5.25"));

    let rows = Storage::new(&db).records().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].bid, "5.25");
    assert_eq!(rows[0].var_bid, "-0.0038");
    assert!(rows[0].id.is_some_and(|id| id > 0));
}

#[actix_web::test]
async fn body_contains_only_the_dollar_field() {
    let dir = TempDir::new().unwrap();
    let app = rate_app!(server_config(
        spawn_upstream(UPSTREAM_BODY, Duration::ZERO),
        &dir.path().join("cotacao.db")
    ));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/cotacao").to_request()).await;
    let body: serde_json::Value = test::read_body_json(resp).await;

    assert_eq!(body, serde_json::json!({ "dollar": "5.25" }));
}

#[actix_web::test]
async fn unknown_paths_return_empty_404() {
    let dir = TempDir::new().unwrap();
    let app = rate_app!(server_config(
        spawn_upstream(UPSTREAM_BODY, Duration::ZERO),
        &dir.path().join("cotacao.db")
    ));

    for path in ["/", "/cotacoes", "/cotacao/extra", "/COTACAO", "/json/last/USD-BRL"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path {path}");
        assert!(test::read_body(resp).await.is_empty(), "path {path}");
    }
    assert!(!dir.path().join("cotacao.db").exists());
}

#[actix_web::test]
async fn slow_upstream_never_yields_200() {
    let dir = TempDir::new().unwrap();
    let app = rate_app!(server_config(
        spawn_upstream(UPSTREAM_BODY, Duration::from_secs(1)),
        &dir.path().join("cotacao.db")
    ));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/cotacao").to_request()).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert!(test::read_body(resp).await.is_empty());
    assert!(!dir.path().join("cotacao.db").exists());
}

#[actix_web::test]
async fn storage_failure_still_answers_with_fetched_bid() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("missing").join("cotacao.db");
    let app = rate_app!(server_config(spawn_upstream(UPSTREAM_BODY, Duration::ZERO), &db));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/cotacao").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let reply: RateReply = test::read_body_json(resp).await;
    assert_eq!(reply.dollar, "5.25");
}

#[actix_web::test]
async fn insert_timeout_still_answers_with_fetched_bid() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("cotacao.db");
    let config = ServerConfig {
        insert_timeout: Duration::ZERO,
        ..server_config(spawn_upstream(UPSTREAM_BODY, Duration::ZERO), &db)
    };
    let app = rate_app!(config);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/cotacao").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let reply: RateReply = test::read_body_json(resp).await;
    assert_eq!(reply.dollar, "5.25");
}

#[actix_web::test]
async fn undecodable_upstream_body_yields_empty_bid() {
    let dir = TempDir::new().unwrap();
    let app = rate_app!(server_config(
        spawn_upstream("<html>too many requests</html>", Duration::ZERO),
        &dir.path().join("cotacao.db")
    ));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/cotacao").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let reply: RateReply = test::read_body_json(resp).await;
    assert_eq!(reply.dollar, "");
}
