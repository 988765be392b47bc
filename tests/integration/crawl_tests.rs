//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use biz_scraper::config::{Config, DEFAULT_USER_AGENT};
use biz_scraper::crawler::{build_http_client, crawl, fetch_page, CrawlController};
use biz_scraper::output::read_csv;
use biz_scraper::progress::{BroadcastSink, ProgressEvent};
use biz_scraper::state::{CrawlPhase, Record, SENTINEL};
use biz_scraper::{summarize, FetchError, ScrapeError};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONTACT_PAGE: &str = r#"
<html>
<head><title>Harbor Bikes | Official Site</title></head>
<body>
    <h1>Welcome aboard</h1>
    <p>Visit us at 12 Pier Road.</p>
    <p>Call 555-867-5309 for repairs.</p>
    <a href="mailto:shop@harborbikes.com">Email us</a>
    <a href="https://www.instagram.com/harborbikes">Follow</a>
</body>
</html>
"#;

/// Creates a test configuration writing its CSV into `dir`
fn create_test_config(dir: &TempDir, delay_ms: u64) -> Config {
    let mut config = Config::default();
    config.scraper.delay_ms = delay_ms;
    config.scraper.timeout_secs = 5;
    config.output.csv_path = dir.path().join("results.csv").display().to_string();
    config
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_extracts_contact_fields() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", CONTACT_PAGE).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, 0);
    let url = format!("{}/", mock_server.uri());

    let state = crawl(&config, vec![url.clone()]).await.unwrap();

    assert_eq!(state.phase, CrawlPhase::Completed);
    assert!(!state.running);
    assert_eq!(state.completed, 1);
    assert!(state.errors.is_empty());
    assert_eq!(
        state.results,
        vec![Record {
            business_name: "Harbor Bikes".to_string(),
            website: url,
            email: "shop@harborbikes.com".to_string(),
            instagram: "https://www.instagram.com/harborbikes".to_string(),
            phone: "555-867-5309".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_http_error_becomes_sentinel_record() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, 0);
    let url = format!("{}/missing", mock_server.uri());

    let state = crawl(&config, vec![url.clone()]).await.unwrap();

    assert_eq!(state.results, vec![Record::unavailable(url.clone())]);
    assert_eq!(state.errors.len(), 1);
    assert!(state.errors[0].starts_with(&url));
    assert!(state.errors[0].contains("404"));
}

#[tokio::test]
async fn test_results_keep_input_order_and_export_csv() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/a", CONTACT_PAGE).await;
    mount_page(
        &mock_server,
        "/b",
        "<html><body><h1>Second Shop</h1><p>Nothing else, here</p></body></html>",
    )
    .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, 10);
    let base = mock_server.uri();
    let urls = vec![format!("{}/a", base), format!("{}/b", base)];

    let state = crawl(&config, urls.clone()).await.unwrap();

    let websites: Vec<_> = state.results.iter().map(|r| r.website.clone()).collect();
    assert_eq!(websites, urls);
    assert_eq!(state.results[1].business_name, "Second Shop");
    assert_eq!(state.results[1].email, SENTINEL);

    let csv_path = dir.path().join("results.csv");
    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        content.lines().next(),
        Some("Business Name,Website,Email,Instagram,Phone")
    );
    assert_eq!(read_csv(&csv_path).unwrap(), state.results);
}

#[tokio::test]
async fn test_summary_counts_found_fields() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/full", CONTACT_PAGE).await;
    mount_page(&mock_server, "/bare", "<html><body></body></html>").await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, 0);
    let base = mock_server.uri();

    let state = crawl(
        &config,
        vec![format!("{}/full", base), format!("{}/bare", base)],
    )
    .await
    .unwrap();
    let summary = summarize(&state.results);

    // The bare page still gets a name from its host
    assert_eq!(summary.business_names, 2);
    assert_eq!(summary.emails, 1);
    assert_eq!(summary.instagram, 1);
    assert_eq!(summary.phones, 1);
}

#[tokio::test]
async fn test_start_while_running_is_rejected() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(CONTACT_PAGE)
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, 0);
    let controller = CrawlController::new(&config, BroadcastSink::default()).unwrap();
    let url = format!("{}/slow", mock_server.uri());

    let handle = controller.start(vec![url.clone()]).unwrap();
    let before = controller.status();

    let second = controller.start(vec![url.clone(), url.clone(), url]);
    assert!(matches!(second, Err(ScrapeError::Busy)));

    let after = controller.status();
    assert!(after.running);
    assert_eq!(after.total, before.total);
    assert_eq!(after.total, 1);

    handle.await.unwrap();
    let finished = controller.status();
    assert!(!finished.running);
    assert_eq!(finished.phase, CrawlPhase::Completed);
    assert_eq!(finished.results.len(), 1);
}

#[tokio::test]
async fn test_stop_ends_crawl_early_and_keeps_results() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", CONTACT_PAGE).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, 300);
    let sink = BroadcastSink::default();
    let mut events = sink.subscribe();
    let controller = CrawlController::new(&config, sink).unwrap();

    let url = format!("{}/", mock_server.uri());
    let handle = controller
        .start(vec![url.clone(), url.clone(), url.clone(), url])
        .unwrap();

    // Wait until the first URL is being processed
    loop {
        let event = events.recv().await.unwrap();
        if matches!(event, ProgressEvent::Progress { current: 1, .. }) {
            break;
        }
    }
    assert!(controller.stop());
    handle.await.unwrap();

    let state = controller.status();
    assert!(!state.running);
    assert_eq!(state.phase, CrawlPhase::Stopped);
    assert!((1..=2).contains(&state.results.len()));

    // Drain to the terminal event
    let terminal = loop {
        let event = events.recv().await.unwrap();
        if event.is_terminal() {
            break event;
        }
    };
    match terminal {
        ProgressEvent::Complete {
            total_results,
            csv_ready,
            ..
        } => {
            assert_eq!(total_results, state.results.len());
            assert!(csv_ready);
        }
        other => panic!("expected completion, got {:?}", other),
    }
    assert!(dir.path().join("results.csv").exists());
}

#[tokio::test]
async fn test_restart_after_stop_keeps_crawls_apart() {
    let mock_server = MockServer::start().await;
    for (route, title) in [("/old", "Old"), ("/new", "New")] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(format!(
                        "<html><head><title>{}</title></head></html>",
                        title
                    ))
                    .set_delay(Duration::from_millis(400)),
            )
            .mount(&mock_server)
            .await;
    }

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, 0);
    let controller = CrawlController::new(&config, BroadcastSink::default()).unwrap();
    let old = format!("{}/old", mock_server.uri());
    let new = format!("{}/new", mock_server.uri());

    let old_handle = controller
        .start(vec![old.clone(), old.clone(), old])
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(controller.stop());

    // The old loop is still inside its fetch
    let restart = controller.start(vec![new.clone(), new.clone(), new.clone()]);
    assert!(matches!(restart, Err(ScrapeError::Busy)));

    old_handle.await.unwrap();
    let stopped = controller.status();
    assert_eq!(stopped.phase, CrawlPhase::Stopped);
    assert_eq!(stopped.results.len(), 1);
    assert_eq!(stopped.results[0].business_name, "Old");

    let new_handle = controller
        .start(vec![new.clone(), new.clone(), new])
        .unwrap();
    assert!(controller.is_running());
    new_handle.await.unwrap();

    let state = controller.status();
    assert_eq!(state.phase, CrawlPhase::Completed);
    assert!(!state.running);
    assert_eq!(state.total, 3);
    assert_eq!(state.completed, 3);
    let names: Vec<_> = state
        .results
        .iter()
        .map(|r| r.business_name.as_str())
        .collect();
    assert_eq!(names, vec!["New", "New", "New"]);
}

#[tokio::test]
async fn test_slow_site_times_out_into_sentinel_record() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(CONTACT_PAGE)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&dir, 0);
    config.scraper.timeout_secs = 1;
    let url = format!("{}/slow", mock_server.uri());

    let client = build_http_client(&config.scraper).unwrap();
    let result = fetch_page(&client, &url).await;
    assert!(matches!(result, Err(FetchError::Timeout { .. })));

    let state = crawl(&config, vec![url.clone()]).await.unwrap();
    assert_eq!(state.results, vec![Record::unavailable(url.clone())]);
    assert_eq!(state.errors.len(), 1);
    assert!(state.errors[0].contains("timeout"));
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "HarborAudit/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CONTACT_PAGE))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&dir, 0);
    config.scraper.user_agent = "HarborAudit/2.0".to_string();
    let url = format!("{}/", mock_server.uri());

    // Requests without the header fall through to wiremock's 404
    let state = crawl(&config, vec![url]).await.unwrap();
    assert!(state.errors.is_empty());
    assert_eq!(state.results[0].business_name, "Harbor Bikes");
}

#[tokio::test]
async fn test_default_user_agent_is_a_browser_identity() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_regex(
            "user-agent",
            r"Mozilla/5\.0 \(Windows NT 10\.0|Chrome/91\.",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let config = Config::default();
    assert_eq!(config.scraper.user_agent, DEFAULT_USER_AGENT);

    let client = build_http_client(&config.scraper).unwrap();
    let body = fetch_page(&client, &mock_server.uri()).await.unwrap();
    assert_eq!(body, "ok");
}
