//! Integration tests for the web UI routes
//!
//! Requests go straight into the router with `tower::ServiceExt::oneshot`,
//! no socket involved.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use biz_scraper::config::Config;
use biz_scraper::crawler::CrawlController;
use biz_scraper::progress::BroadcastSink;
use biz_scraper::server::{router, AppState};
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_app(dir: &TempDir) -> (Router, CrawlController<BroadcastSink>) {
    let mut config = Config::default();
    config.scraper.delay_ms = 0;
    config.output.csv_path = dir.path().join("business_info.csv").display().to_string();

    let sink = BroadcastSink::default();
    let controller = CrawlController::new(&config, sink.clone()).unwrap();
    let state = AppState::new(controller.clone(), sink, &config.output.csv_path);
    (router(state), controller)
}

fn start_request(urls: &str) -> Request<Body> {
    Request::post("/start_scraping")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::json!({ "urls": urls }).to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_index_serves_html() {
    let dir = TempDir::new().unwrap();
    let (app, _) = create_app(&dir);

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_status_when_idle() {
    let dir = TempDir::new().unwrap();
    let (app, _) = create_app(&dir);

    let response = app
        .oneshot(Request::get("/get_status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["is_running"], false);
    assert_eq!(body["phase"], "idle");
    assert_eq!(body["results"], serde_json::json!([]));
}

#[tokio::test]
async fn test_start_without_urls_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (app, controller) = create_app(&dir);

    let response = app.oneshot(start_request("  \n ")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "No URLs provided");
    assert!(!controller.is_running());
}

#[tokio::test]
async fn test_stop_always_succeeds() {
    let dir = TempDir::new().unwrap();
    let (app, _) = create_app(&dir);

    let response = app
        .oneshot(Request::post("/stop_scraping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["message"], "Scraping stopped");
}

#[tokio::test]
async fn test_download_before_any_export() {
    let dir = TempDir::new().unwrap();
    let (app, _) = create_app(&dir);

    let response = app
        .oneshot(Request::get("/download_csv").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "CSV file not found");
}

#[tokio::test]
async fn test_start_then_busy_then_download() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>Corner Deli</title></head></html>")
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let (app, controller) = create_app(&dir);
    let urls = format!("{}/\n\n{}/menu\n", mock_server.uri(), mock_server.uri());

    let response = app.clone().oneshot(start_request(&urls)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total_urls"], 2);
    assert_eq!(body["message"], "Started scraping 2 websites");

    let response = app.clone().oneshot(start_request(&urls)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        json_body(response).await["error"],
        "Scraping is already in progress"
    );

    // Let the background crawl finish
    for _ in 0..100 {
        if !controller.is_busy() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    assert!(!controller.is_running());
    assert_eq!(controller.results().len(), 2);

    let response = app
        .oneshot(Request::get("/download_csv").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains("business_info.csv"));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(csv.starts_with("Business Name,Website,Email,Instagram,Phone"));
    assert!(csv.contains("Corner Deli"));
}
